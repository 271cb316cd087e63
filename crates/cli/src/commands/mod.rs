mod bench;
pub use bench::*;

mod binet;
pub use binet::*;

mod calc;
pub use calc::*;

mod compare;
pub use compare::*;

mod demo;
pub use demo::*;

mod generate;
pub use generate::*;

mod info;
pub use info::*;

mod report;
pub use report::*;

mod sequence;
pub use sequence::*;
