#[cfg(test)]
pub mod mapper_test;

pub mod button;
pub mod contact;
pub mod host;
pub mod layout;
pub mod listener;
pub mod mapper;
pub mod pointer;
pub mod region;
