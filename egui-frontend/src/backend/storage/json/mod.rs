pub mod connection;
pub mod expense_repository;

pub use connection::JsonConnection;
pub use expense_repository::ExpenseRepository;
