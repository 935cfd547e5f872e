//! Course catalog
//!
//! Fixed course data, one entry per experience level.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Experience level of the person asking for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
}

impl ExperienceLevel {
    /// Display label ("Beginner", "Intermediate")
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
        }
    }

    /// Course recommended for this level
    pub fn course(self) -> &'static CourseRecommendation {
        match self {
            ExperienceLevel::Beginner => &BEGINNER_COURSE,
            ExperienceLevel::Intermediate => &INTERMEDIATE_COURSE,
        }
    }
}

/// A recommended course
#[derive(Debug)]
pub struct CourseRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub prerequisites: &'static str,
    pub topics: &'static [&'static str],
}

pub static BEGINNER_COURSE: CourseRecommendation = CourseRecommendation {
    title: "Professional JavaScript",
    description: "A hands-on introduction to modern JavaScript, from the core language \
                  to working with the browser and asynchronous code.",
    duration: "8 weeks",
    prerequisites: "Basic HTML and CSS",
    topics: &[
        "Variables, types and operators",
        "Functions and scope",
        "Arrays and objects",
        "DOM manipulation and events",
        "Promises and async/await",
        "Fetching data from APIs",
        "ES modules and tooling",
    ],
};

pub static INTERMEDIATE_COURSE: CourseRecommendation = CourseRecommendation {
    title: "Professional React/NextJs",
    description: "Build production-ready applications with React and Next.js, covering \
                  component design, data fetching and deployment.",
    duration: "10 weeks",
    prerequisites: "Solid JavaScript fundamentals, including ES6+ and async programming",
    topics: &[
        "Components, props and state",
        "Hooks and custom hooks",
        "Context and state management",
        "Next.js routing and layouts",
        "Server components and data fetching",
        "API routes and server actions",
        "Testing React applications",
        "Performance optimization and deployment",
    ],
};
