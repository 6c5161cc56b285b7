//! Course entity.

/// A course students can enroll in.
///
/// The `code` (e.g. `M101`) is unique across all courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub credit_units: i64,
    pub description: Option<String>,
}

impl Course {
    /// Creates a new Course instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let course = Course::new(1, "Math".to_string(), "M101".to_string(), 3, None);
    /// ```
    pub fn new(
        id: i64,
        title: String,
        code: String,
        credit_units: i64,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            code,
            credit_units,
            description,
        }
    }
}

/// Input data for creating a new course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub code: String,
    pub credit_units: i64,
    pub description: Option<String>,
}
