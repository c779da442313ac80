pub mod grade;
pub mod student;
pub mod subject;
pub mod user;

pub use grade::{Grade, GradeReport};
pub use student::Student;
pub use subject::Subject;
pub use user::{User, UserProfile};
