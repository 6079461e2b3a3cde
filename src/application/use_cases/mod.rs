mod check_updates;

pub use check_updates::CheckUpdatesUseCase;
