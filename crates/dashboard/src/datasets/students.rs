use once_cell::sync::Lazy;

use contracts::domain::a003_student::{EnrollmentStatus, Student};

/// The education module dataset.
pub static STUDENTS: Lazy<Vec<Student>> = Lazy::new(|| {
    use EnrollmentStatus::*;

    vec![
        Student::new(
            "Alice Nguyen".to_string(),
            "alice.nguyen@example.com".to_string(),
            "Data Analytics".to_string(),
            "2026-01-12".to_string(),
            Active,
            450.0,
        ),
        Student::new(
            "Bruno Costa".to_string(),
            "bruno.costa@example.com".to_string(),
            "UX Design".to_string(),
            "2025-09-03".to_string(),
            Graduated,
            0.0,
        ),
        Student::new(
            "Chloe Martin".to_string(),
            "chloe.martin@example.com".to_string(),
            "Data Analytics".to_string(),
            "2026-02-20".to_string(),
            Active,
            1200.0,
        ),
        Student::new(
            "Daniel Kim".to_string(),
            "daniel.kim@example.com".to_string(),
            "Cloud Engineering".to_string(),
            "2025-11-15".to_string(),
            Withdrawn,
            300.0,
        ),
        Student::new(
            "Elena Petrova".to_string(),
            "elena.petrova@example.com".to_string(),
            "UX Design".to_string(),
            "2026-03-01".to_string(),
            Active,
            0.0,
        ),
        Student::new(
            "Farid Rahimi".to_string(),
            "farid.rahimi@example.com".to_string(),
            "Cloud Engineering".to_string(),
            "2026-01-30".to_string(),
            Active,
            825.0,
        ),
    ]
});
