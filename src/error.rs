use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("{0}")]
    NotFound(String),

    #[error("Car '{make} {model} {color}' is not available")]
    InvalidCombination {
        make: String,
        model: String,
        color: String,
    },

    #[error("{0}")]
    ValidationFailure(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl OrderError {
    pub fn order_not_found(id: &str) -> Self {
        OrderError::NotFound(format!("Car order with ID {} not found", id))
    }

    pub fn make_not_found(make: &str) -> Self {
        OrderError::NotFound(format!("No models found for make '{}'", make))
    }

    pub fn invalid_combination(make: &str, model: &str, color: &str) -> Self {
        OrderError::InvalidCombination {
            make: make.to_string(),
            model: model.to_string(),
            color: color.to_string(),
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
