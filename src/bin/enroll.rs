//! Terminal client for the course enrollment API.
//!
//! Mounts the root app on stdout and renders one view per command.
//!
//! # Usage
//!
//! ```bash
//! # Register a student (prompts for missing fields)
//! cargo run --bin enroll -- students add --name "Ada Lovelace" --email ada@example.com
//!
//! # Create a course and enroll
//! cargo run --bin enroll -- courses add --title "Calculus I" --code MATH101 --credits 4
//! cargo run --bin enroll -- enroll 1 1
//!
//! # Study tips
//! cargo run --bin enroll -- tips "Calculus I" 4
//!
//! # Against another server
//! cargo run --bin enroll -- --base-url http://10.0.0.5:8000 health
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (optional): API root, default `http://localhost:8000`

use course_enrollment::api::dto::{CreateCourseRequest, CreateStudentRequest};
use course_enrollment::frontend::{
    APP_MOUNT_POINT, App, DEFAULT_BASE_URL, TerminalDocument, configure_http_client, initialize,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// Terminal client for the course enrollment API.
#[derive(Parser)]
#[command(name = "enroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Manage courses
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Enroll a student in a course
    Enroll { student_id: i64, course_id: i64 },

    /// List all enrollments
    Enrollments,

    /// Get study tips for a course
    Tips {
        course_title: String,
        credit_units: i64,
    },

    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum StudentAction {
    /// List all students
    List,

    /// Register a student
    Add {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show one student
    Show { id: i64 },

    /// Courses a student is enrolled in
    Courses { id: i64 },
}

#[derive(Subcommand)]
enum CourseAction {
    /// List all courses
    List,

    /// Create a course
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        code: Option<String>,

        #[arg(long)]
        credits: Option<i64>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show one course
    Show { id: i64 },

    /// Students enrolled in a course
    Students { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut document = TerminalDocument;
    let mut app = initialize(
        &mut document,
        APP_MOUNT_POINT,
        configure_http_client(cli.base_url),
    )?;

    if let Err(e) = dispatch(&mut app, cli.command).await {
        eprintln!("{} {}", "❌".red(), e.to_string().red());
        std::process::exit(1);
    }

    Ok(())
}

async fn dispatch(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::Students { action } => match action {
            StudentAction::List => app.students().await?,
            StudentAction::Add { name, email } => {
                let request = CreateStudentRequest {
                    name: prompt_missing(name, "Name")?,
                    email: prompt_missing(email, "Email")?,
                };
                app.add_student(&request).await?
            }
            StudentAction::Show { id } => app.student(id).await?,
            StudentAction::Courses { id } => app.student_courses(id).await?,
        },
        Commands::Courses { action } => match action {
            CourseAction::List => app.courses().await?,
            CourseAction::Add {
                title,
                code,
                credits,
                description,
            } => {
                let credit_units = match credits {
                    Some(c) => c,
                    None => Input::new()
                        .with_prompt("Credit units")
                        .default(3)
                        .interact_text()?,
                };
                let request = CreateCourseRequest {
                    title: prompt_missing(title, "Title")?,
                    code: prompt_missing(code, "Code")?,
                    credit_units,
                    description,
                };
                app.add_course(&request).await?
            }
            CourseAction::Show { id } => app.course(id).await?,
            CourseAction::Students { id } => app.course_students(id).await?,
        },
        Commands::Enroll {
            student_id,
            course_id,
        } => app.enroll(student_id, course_id).await?,
        Commands::Enrollments => app.enrollments().await?,
        Commands::Tips {
            course_title,
            credit_units,
        } => app.study_tips(&course_title, credit_units).await?,
        Commands::Health => app.health().await?,
    }

    Ok(())
}

/// Returns `value`, or asks for it interactively.
fn prompt_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}
