mod assessor;

pub use assessor::IAssessor;
