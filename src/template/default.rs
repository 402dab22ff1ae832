/// Built-in credentials email. The first line doubles as the subject.
pub const DEFAULT_TEMPLATE: &str = r#"UPEI Off-Campus Student Credentials - IB {csv_filename} class of 2026

Hi {First Name},

Welcome to the Robertson Library! Your UPEI Library profile is now active, which means that you now have access to all of our online resources even while you're outside of our campus. 

You will be receiving instructions on how to use these credentials and access our physical and online resources during your Robertson Library Orientation Session on Monday Nov 4th.

You'll also receive your Robertson Library library card at the Library Orientation Session, which allows you to borrow many physical resources that we offer at the Library. Keep in mind that you must have this card with you in order for us to loan anything to you.

Below are your username and password to access the library resources from off campus.
username: {Username}
password: {Password}

You'll have to login through the following link, whenever you are trying to access our online resources:
https://proxy.library.upei.ca/public/proxylogin.htm

If you have any questions, please feel free to ask myself, your IB coordinator, or email your librarian, Katelyn Browne, at krbrowne@upei.ca. You can also always speak to someone at the Robertson Library Service Desk.

Thank you,
Spencer"#;
