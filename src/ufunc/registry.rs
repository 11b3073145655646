// src/ufunc/registry.rs

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use log::debug;
use crate::core::{DType, Error, Result};
use crate::ufunc::{UfuncInfo, UFUNCS};

/// What a facade name resolves to.
#[derive(Debug, Clone, Copy)]
pub enum Symbol {
    Ufunc(&'static UfuncInfo),
    DType(DType),
}

impl Symbol {
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::Ufunc(_) => "ufunc",
            Symbol::DType(_) => "dtype",
        }
    }
}

/// Flat name table over every exported ufunc and element type.
///
/// Built once from static tables; there is no way to add or replace a name
/// afterwards.
#[derive(Debug)]
pub struct Registry {
    symbols: BTreeMap<&'static str, Symbol>,
}

impl Registry {
    /// Register each ufunc under its `np_name` and each dtype under its
    /// canonical name. Any name seen twice aborts the build.
    pub fn build(ufuncs: &'static [UfuncInfo], dtypes: &[DType]) -> Result<Self> {
        let mut symbols = BTreeMap::new();

        let entries = ufuncs
            .iter()
            .map(|info| (info.np_name, Symbol::Ufunc(info)))
            .chain(dtypes.iter().map(|dtype| (dtype.name(), Symbol::DType(*dtype))));

        for (name, symbol) in entries {
            if symbols.insert(name, symbol).is_some() {
                return Err(Error::DuplicateName(name.to_string()));
            }
        }

        debug!("Registry built with {} symbols", symbols.len());
        Ok(Registry { symbols })
    }

    pub fn get(&self, name: &str) -> Result<Symbol> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownName(name.to_string()))
    }

    pub fn ufunc(&self, name: &str) -> Result<&'static UfuncInfo> {
        match self.get(name)? {
            Symbol::Ufunc(info) => Ok(info),
            Symbol::DType(_) => Err(Error::WrongSymbolKind {
                name: name.to_string(),
                expected: "ufunc",
            }),
        }
    }

    pub fn dtype(&self, name: &str) -> Result<DType> {
        match self.get(name)? {
            Symbol::DType(dtype) => Ok(dtype),
            Symbol::Ufunc(_) => Err(Error::WrongSymbolKind {
                name: name.to_string(),
                expected: "dtype",
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Symbol)> + '_ {
        self.symbols.iter().map(|(name, symbol)| (*name, *symbol))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

lazy_static! {
    // The builtin tables are fixed at compile time, so a collision here is a
    // programming error and should stop the process on first use.
    static ref FACADE: Registry = Registry::build(UFUNCS, DType::ALL)
        .unwrap_or_else(|e| panic!("builtin symbol table is inconsistent: {}", e));
}

/// Process-wide registry over the builtin ufuncs and dtypes.
pub fn facade() -> &'static Registry {
    &FACADE
}
