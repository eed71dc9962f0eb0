//! Block fixed to exactly one name.

use super::{BlockOptions, DataBlock};
use crate::error::{CriticalDataError, Result};
use crate::name::DataName;

/// Block whose identity is a single, permanent name.
///
/// Any other name is rejected and deletion is unsupported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleDataBlock {
    name: DataName,
    value: Option<Vec<u8>>,
    options: BlockOptions,
}

impl SingleDataBlock {
    pub fn new(name: DataName, options: BlockOptions) -> Self {
        Self {
            name,
            value: None,
            options,
        }
    }

    pub fn name(&self) -> &DataName {
        &self.name
    }

    fn check_name(&self, name: &DataName) -> Result<()> {
        if *name == self.name {
            Ok(())
        } else {
            Err(CriticalDataError::NameMismatch {
                expected: self.name.clone(),
                actual: name.clone(),
            })
        }
    }
}

impl DataBlock for SingleDataBlock {
    fn options(&self) -> BlockOptions {
        self.options
    }

    fn get_raw(&self, name: &DataName) -> Result<&[u8]> {
        self.check_name(name)?;
        self.value
            .as_deref()
            .ok_or_else(|| CriticalDataError::NotFound(name.clone()))
    }

    fn set_raw(&mut self, name: DataName, bytes: Vec<u8>) -> Result<()> {
        self.check_name(&name)?;
        self.value = Some(bytes);
        Ok(())
    }

    fn accepts(&self, name: &DataName) -> Result<()> {
        self.check_name(name)
    }

    fn delete(&mut self, _name: &DataName) -> Result<()> {
        Err(CriticalDataError::Unsupported(
            "delete on a single-entry block",
        ))
    }

    fn contains(&self, name: &DataName) -> bool {
        *name == self.name && self.value.is_some()
    }

    fn names(&self) -> Vec<DataName> {
        match self.value {
            Some(_) => vec![self.name.clone()],
            None => Vec::new(),
        }
    }

    fn has_data(&self) -> bool {
        self.value.is_some()
    }
}
