//! Choice enums and option lists
//!
//! Each GraphQL enum mirrors a coded database enum; the option queries expose
//! the stored codes with their labels.

use async_graphql::{Enum, SimpleObject};

use crate::models::choice::Choice;
use crate::models::{
    CourseLevel as DbCourseLevel, EmployeeStatus as DbEmployeeStatus, Gender as DbGender,
    PayPeriod as DbPayPeriod,
};

/// A stored code with its human-readable label
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct ChoiceOption {
    /// Code stored in the database (e.g. "F")
    pub value: String,
    pub label: String,
}

/// Every option of a choice enum, in display order
pub fn choice_options<C: Choice>() -> Vec<ChoiceOption> {
    C::ALL
        .iter()
        .map(|choice| ChoiceOption {
            value: choice.code().to_string(),
            label: choice.label().to_string(),
        })
        .collect()
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum EmployeeStatus {
    FullTime,
    PartTime,
    Contract,
    LaidOff,
}

impl From<DbEmployeeStatus> for EmployeeStatus {
    fn from(db: DbEmployeeStatus) -> Self {
        match db {
            DbEmployeeStatus::FullTime => Self::FullTime,
            DbEmployeeStatus::PartTime => Self::PartTime,
            DbEmployeeStatus::Contract => Self::Contract,
            DbEmployeeStatus::LaidOff => Self::LaidOff,
        }
    }
}

impl From<EmployeeStatus> for DbEmployeeStatus {
    fn from(gql: EmployeeStatus) -> Self {
        match gql {
            EmployeeStatus::FullTime => Self::FullTime,
            EmployeeStatus::PartTime => Self::PartTime,
            EmployeeStatus::Contract => Self::Contract,
            EmployeeStatus::LaidOff => Self::LaidOff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Gender {
    Male,
    Female,
}

impl From<DbGender> for Gender {
    fn from(db: DbGender) -> Self {
        match db {
            DbGender::Male => Self::Male,
            DbGender::Female => Self::Female,
        }
    }
}

impl From<Gender> for DbGender {
    fn from(gql: Gender) -> Self {
        match gql {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
        }
    }
}

/// Pay period for `perPeriod` amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum PayPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<DbPayPeriod> for PayPeriod {
    fn from(db: DbPayPeriod) -> Self {
        match db {
            DbPayPeriod::Daily => Self::Daily,
            DbPayPeriod::Weekly => Self::Weekly,
            DbPayPeriod::Monthly => Self::Monthly,
            DbPayPeriod::Yearly => Self::Yearly,
        }
    }
}

impl From<PayPeriod> for DbPayPeriod {
    fn from(gql: PayPeriod) -> Self {
        match gql {
            PayPeriod::Daily => Self::Daily,
            PayPeriod::Weekly => Self::Weekly,
            PayPeriod::Monthly => Self::Monthly,
            PayPeriod::Yearly => Self::Yearly,
        }
    }
}

/// Qualification level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CourseLevel {
    HighSchool,
    Degree,
    Diploma,
    Masters,
    Doctorate,
}

impl From<DbCourseLevel> for CourseLevel {
    fn from(db: DbCourseLevel) -> Self {
        match db {
            DbCourseLevel::HighSchool => Self::HighSchool,
            DbCourseLevel::Degree => Self::Degree,
            DbCourseLevel::Diploma => Self::Diploma,
            DbCourseLevel::Masters => Self::Masters,
            DbCourseLevel::Doctorate => Self::Doctorate,
        }
    }
}

impl From<CourseLevel> for DbCourseLevel {
    fn from(gql: CourseLevel) -> Self {
        match gql {
            CourseLevel::HighSchool => Self::HighSchool,
            CourseLevel::Degree => Self::Degree,
            CourseLevel::Diploma => Self::Diploma,
            CourseLevel::Masters => Self::Masters,
            CourseLevel::Doctorate => Self::Doctorate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_in_order() {
        let options = choice_options::<DbEmployeeStatus>();
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["F", "P", "C", "L"]);
        assert_eq!(options[3].label, "Laid Off");
    }

    #[test]
    fn test_course_level_round_trip() {
        for level in DbCourseLevel::ALL {
            let gql = CourseLevel::from(*level);
            assert_eq!(DbCourseLevel::from(gql), *level);
        }
    }
}
