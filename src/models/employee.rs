use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub age: i32,
    pub department: Option<String>,
}

/// Payload submitted for create or update, not yet validated.
#[derive(Deserialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeCandidate {
    pub id: Option<i32>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub gender: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub age: i32,
    pub department: Option<String>,
}

impl Employee {
    pub fn new(id: i32, name: &str, gender: &str, city: &str, age: i32, department: &str) -> Self {
        Employee {
            id,
            name: name.to_string(),
            gender: Some(gender.to_string()),
            city: Some(city.to_string()),
            age,
            department: Some(department.to_string()),
        }
    }

    /// Builds a record from an already validated candidate. Any id on the
    /// candidate is ignored in favour of `id`.
    pub(crate) fn from_candidate(id: i32, candidate: EmployeeCandidate) -> Self {
        Employee {
            id,
            name: candidate.name.unwrap_or_default(),
            gender: candidate.gender,
            city: candidate.city,
            age: candidate.age,
            department: candidate.department,
        }
    }

    /// Overwrites every field except `id`.
    pub(crate) fn overwrite_with(&mut self, candidate: EmployeeCandidate) {
        self.name = candidate.name.unwrap_or_default();
        self.gender = candidate.gender;
        self.city = candidate.city;
        self.age = candidate.age;
        self.department = candidate.department;
    }
}

impl EmployeeCandidate {
    pub fn named(name: &str) -> Self {
        EmployeeCandidate {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}
