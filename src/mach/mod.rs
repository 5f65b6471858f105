/*!
## Rust Machine Module

This Rust module runs parsed bitwise programs.

*/

mod runtime;
mod val;
mod var;

pub use runtime::evaluate;
pub use runtime::Event;
pub use runtime::Mode;
pub use runtime::Runtime;
pub use runtime::ACCEPTED;
pub use val::Val;
pub use var::Var;
