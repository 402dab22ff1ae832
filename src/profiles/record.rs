use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::LoadError;

/// Column of the roster file that every row must carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Username,
        Field::Password,
    ];

    /// Exact header text of the column.
    pub fn column(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.column() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One roster row: the values needed to write a single credentials email.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

impl Record {
    /// Builds a record from a header-keyed row. Empty values are kept as-is;
    /// only an absent key is an error.
    pub fn from_row(row: &HashMap<String, String>) -> Result<Self, LoadError> {
        let take = |field: Field| {
            row.get(field.column())
                .cloned()
                .ok_or_else(|| LoadError::MissingColumn(field.column().to_string()))
        };

        Ok(Self {
            first_name: take(Field::FirstName)?,
            last_name: take(Field::LastName)?,
            email: take(Field::Email)?,
            username: take(Field::Username)?,
            password: take(Field::Password)?,
        })
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }
}
