/// Application layer - Use cases, DTOs and factories
///
/// This layer orchestrates the domain and the adapters through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
