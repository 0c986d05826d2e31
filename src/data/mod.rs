pub mod trace_look;
pub mod traces;
