//! Student entity.

/// A registered student.
///
/// Email addresses are unique across all students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Input data for registering a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}
