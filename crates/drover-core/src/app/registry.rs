//! Registry of functions (name -> capability).
//!
//! Design:
//! - Built during worker construction (mutable).
//! - Used during task execution (immutable).
//! This avoids locks and keeps lookup unambiguous: uniqueness is enforced at
//! registration time, not discovered at lookup time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{DroverError, FunctionDeclaration};
use crate::ports::Function;

/// Ordered, unique-by-name collection of a worker's functions.
///
/// Registration order is preserved because the declaration list sent to the
/// decision authority keeps the order the worker was assembled in.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: Vec<Arc<dyn Function>>,
    index: HashMap<String, usize>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a function. A second function with the same name is a
    /// configuration error, not a "last wins" overwrite.
    pub fn register(&mut self, function: Arc<dyn Function>) -> Result<(), DroverError> {
        let name = function.name().to_string();
        if self.index.contains_key(&name) {
            return Err(DroverError::DuplicateFunction(name));
        }
        self.index.insert(name, self.functions.len());
        self.functions.push(function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Function>> {
        self.index.get(name).map(|&i| &self.functions[i])
    }

    /// Declarations in registration order, for the worker descriptor.
    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        self.functions.iter().map(|f| f.as_ref().declaration()).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
