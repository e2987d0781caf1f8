//! The closed set of ticket categories.
//!
//! Each category maps to exactly one template document in the storage bucket
//! and one independent numbering sequence. Unknown codes are rejected at
//! validation time rather than looked up dynamically.

/// Ticket category, identified on the wire by its numeric code 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    C1 = 1,
    C2 = 2,
    C3 = 3,
    C4 = 4,
    C5 = 5,
    C6 = 6,
    C7 = 7,
    C8 = 8,
    C9 = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::C1,
        Category::C2,
        Category::C3,
        Category::C4,
        Category::C5,
        Category::C6,
        Category::C7,
        Category::C8,
        Category::C9,
    ];

    /// Parse a wire code into a category; `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Convention-based path of this category's template in the bucket.
    pub fn template_path(self) -> String {
        format!("ticketData/30{}-3.pdf", self.code())
    }
}
