//! Root component: renders API results to its mount point.

use colored::*;
use std::io::{self, Write};
use thiserror::Error;

use super::client::{ApiClient, ClientError};
use crate::api::dto::{CourseResponse, CreateCourseRequest, CreateStudentRequest, StudentResponse};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

type ViewResult = Result<(), ViewError>;

/// The mounted application.
///
/// Owns the API client and the writer of the mount point it was attached to.
/// Every view fetches from the API, then renders into the mount point.
pub struct App {
    client: ApiClient,
    out: Box<dyn Write + Send>,
}

impl App {
    pub(crate) fn new(client: ApiClient, out: Box<dyn Write + Send>) -> Self {
        Self { client, out }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Base URL every request of this app resolves against.
    pub fn base_url(&self) -> &str {
        self.client.config().base_url()
    }

    pub async fn students(&mut self) -> ViewResult {
        let students = self.client.list_students().await?;
        self.heading("👥 Students")?;
        self.student_table(&students)
    }

    pub async fn student(&mut self, student_id: i64) -> ViewResult {
        let student = self.client.get_student(student_id).await?;
        self.heading("👤 Student")?;
        self.student_details(&student)
    }

    pub async fn add_student(&mut self, request: &CreateStudentRequest) -> ViewResult {
        let student = self.client.create_student(request).await?;
        self.success("Student registered")?;
        self.student_details(&student)
    }

    pub async fn student_courses(&mut self, student_id: i64) -> ViewResult {
        let student = self.client.get_student(student_id).await?;
        let courses = self.client.student_courses(student_id).await?;
        self.heading(&format!("📚 Courses of {}", student.name))?;
        self.course_table(&courses)
    }

    pub async fn courses(&mut self) -> ViewResult {
        let courses = self.client.list_courses().await?;
        self.heading("📚 Courses")?;
        self.course_table(&courses)
    }

    pub async fn course(&mut self, course_id: i64) -> ViewResult {
        let course = self.client.get_course(course_id).await?;
        self.heading("📘 Course")?;
        self.course_details(&course)
    }

    pub async fn add_course(&mut self, request: &CreateCourseRequest) -> ViewResult {
        let course = self.client.create_course(request).await?;
        self.success("Course created")?;
        self.course_details(&course)
    }

    pub async fn course_students(&mut self, course_id: i64) -> ViewResult {
        let course = self.client.get_course(course_id).await?;
        let students = self.client.course_students(course_id).await?;
        self.heading(&format!("👥 Roster of {} ({})", course.title, course.code))?;
        self.student_table(&students)
    }

    pub async fn enroll(&mut self, student_id: i64, course_id: i64) -> ViewResult {
        let response = self.client.enroll(student_id, course_id).await?;
        self.success(&response.message)?;
        writeln!(
            self.out,
            "  Student {} → Course {}",
            response.student_id.to_string().cyan(),
            response.course_id.to_string().cyan()
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    pub async fn enrollments(&mut self) -> ViewResult {
        let enrollments = self.client.list_enrollments().await?;
        self.heading("📋 Enrollments")?;

        if enrollments.is_empty() {
            writeln!(self.out, "{}", "  No enrollments yet".yellow())?;
            return Ok(());
        }

        writeln!(
            self.out,
            "  {:<6} {:<10} {:<10}",
            "ID".bright_white().bold(),
            "Student".bright_white().bold(),
            "Course".bright_white().bold()
        )?;
        writeln!(self.out, "  {}", "─".repeat(30).bright_black())?;
        for e in &enrollments {
            writeln!(
                self.out,
                "  {:<6} {:<10} {:<10}",
                e.id.to_string().bright_black(),
                e.student_id.to_string().cyan(),
                e.course_id.to_string().cyan()
            )?;
        }
        self.total(enrollments.len())
    }

    pub async fn study_tips(&mut self, course_title: &str, credit_units: i64) -> ViewResult {
        let response = self.client.study_tips(course_title, credit_units).await?;
        self.heading(&format!("💡 Study tips for {course_title}"))?;

        for (i, tip) in response.tips.iter().enumerate() {
            writeln!(self.out, "  {}. {}", (i + 1).to_string().bright_cyan(), tip)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub async fn health(&mut self) -> ViewResult {
        let health = self.client.health().await?;
        self.heading("🩺 API Health")?;

        let status = if health.status == "healthy" {
            health.status.green().bold()
        } else {
            health.status.red().bold()
        };
        writeln!(self.out, "  Status:  {} ({})", status, health.message)?;
        writeln!(self.out, "  Version: {}", health.version.bright_black())?;
        writeln!(self.out, "  Base URL: {}", self.base_url().cyan())?;

        for (name, check) in [
            ("database", &health.checks.database),
            ("study_tips", &health.checks.study_tips),
        ] {
            let status = if check.status == "ok" {
                check.status.green()
            } else {
                check.status.red()
            };
            writeln!(
                self.out,
                "  {:<12} {} {}",
                name,
                status,
                check.message.as_deref().unwrap_or("").bright_black()
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", title.bright_blue().bold())?;
        writeln!(self.out)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("✅ {message}").green().bold())?;
        writeln!(self.out)
    }

    fn total(&mut self, count: usize) -> ViewResult {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "  Total: {}",
            count.to_string().bright_white().bold()
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    fn student_details(&mut self, student: &StudentResponse) -> ViewResult {
        writeln!(self.out, "  ID:    {}", student.id.to_string().bright_black())?;
        writeln!(self.out, "  Name:  {}", student.name.cyan())?;
        writeln!(self.out, "  Email: {}", student.email)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn course_details(&mut self, course: &CourseResponse) -> ViewResult {
        writeln!(self.out, "  ID:      {}", course.id.to_string().bright_black())?;
        writeln!(self.out, "  Title:   {}", course.title.cyan())?;
        writeln!(self.out, "  Code:    {}", course.code)?;
        writeln!(self.out, "  Credits: {}", course.credit_units)?;
        if let Some(description) = &course.description {
            writeln!(self.out, "  About:   {}", description)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn student_table(&mut self, students: &[StudentResponse]) -> ViewResult {
        if students.is_empty() {
            writeln!(self.out, "{}", "  No students found".yellow())?;
            return Ok(());
        }

        writeln!(
            self.out,
            "  {:<6} {:<30} {:<30}",
            "ID".bright_white().bold(),
            "Name".bright_white().bold(),
            "Email".bright_white().bold()
        )?;
        writeln!(self.out, "  {}", "─".repeat(66).bright_black())?;
        for s in students {
            writeln!(
                self.out,
                "  {:<6} {:<30} {:<30}",
                s.id.to_string().bright_black(),
                s.name.cyan(),
                s.email
            )?;
        }
        self.total(students.len())
    }

    fn course_table(&mut self, courses: &[CourseResponse]) -> ViewResult {
        if courses.is_empty() {
            writeln!(self.out, "{}", "  No courses found".yellow())?;
            return Ok(());
        }

        writeln!(
            self.out,
            "  {:<6} {:<10} {:<40} {:<7}",
            "ID".bright_white().bold(),
            "Code".bright_white().bold(),
            "Title".bright_white().bold(),
            "Credits".bright_white().bold()
        )?;
        writeln!(self.out, "  {}", "─".repeat(66).bright_black())?;
        for c in courses {
            writeln!(
                self.out,
                "  {:<6} {:<10} {:<40} {:<7}",
                c.id.to_string().bright_black(),
                c.code.cyan(),
                c.title,
                c.credit_units
            )?;
        }
        self.total(courses.len())
    }
}
