pub mod db;
pub mod entities;
pub mod hooks;
pub mod scope;
pub mod services;

#[cfg(test)]
mod fixtures;
