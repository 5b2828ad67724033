/// Pages of the site. Each HTML page loads the same bundle and the app picks
/// what to mount from the location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Searchable donor listing (index.html)
    Home,
    Register,
    Admin,
    Contact,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("admin") {
            Page::Admin
        } else if path.contains("register") {
            Page::Register
        } else if path.contains("contact") {
            Page::Contact
        } else {
            Page::Home
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Register => "register.html",
            Page::Admin => "admin.html",
            Page::Contact => "contact.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Find Donors",
            Page::Register => "Become a Donor",
            Page::Admin => "Admin",
            Page::Contact => "Contact",
        }
    }

    /// Order of the navigation links
    pub const NAV: [Page; 4] = [Page::Home, Page::Register, Page::Contact, Page::Admin];
}
