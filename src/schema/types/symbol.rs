use crate::schema::types::errors::SchemaError;
use crate::schema::types::scalar::ScalarType;
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// Discriminant of a [`Symbol`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Structure,
    Function,
    Value,
    Iterable,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structure => "struct",
            Self::Function => "function",
            Self::Value => "value",
            Self::Iterable => "iterable",
        };
        f.write_str(name)
    }
}

/// An entity of the module symbol tree handed to the type checker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Symbol {
    Structure(StructureSymbol),
    Function(FunctionSymbol),
    Value(ValueSymbol),
    Iterable(IterableSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Self::Structure(s) => s.name(),
            Self::Function(f) => f.name(),
            Self::Value(v) => v.name(),
            Self::Iterable(i) => i.name(),
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::Structure(_) => SymbolKind::Structure,
            Self::Function(_) => SymbolKind::Function,
            Self::Value(_) => SymbolKind::Value,
            Self::Iterable(_) => SymbolKind::Iterable,
        }
    }

    pub fn as_structure(&self) -> Option<&StructureSymbol> {
        match self {
            Self::Structure(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_structure_mut(&mut self) -> Option<&mut StructureSymbol> {
        match self {
            Self::Structure(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSymbol> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&ValueSymbol> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_iterable(&self) -> Option<&IterableSymbol> {
        match self {
            Self::Iterable(i) => Some(i),
            _ => None,
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Self::Structure(s) => s.write_tree(f, depth),
            Self::Function(func) => writeln!(f, "{indent}{func}"),
            Self::Value(v) => writeln!(f, "{indent}value {}: {}", v.name, v.value_type),
            Self::Iterable(i) => {
                let container = if i.is_dictionary { "dictionary" } else { "array" };
                match &i.element {
                    IterableElement::Scalar(t) => {
                        writeln!(f, "{indent}{container} {}: {t}", i.name)
                    }
                    IterableElement::Structure(s) => {
                        writeln!(f, "{indent}{container} {} of", i.name)?;
                        s.write_tree(f, depth + 1)
                    }
                }
            }
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

/// A named structure owning its attributes.
///
/// Every attribute name maps to one or more symbols. More than one symbol is
/// only ever stored under a name when all of them are function overloads.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StructureSymbol {
    name: String,
    attributes: BTreeMap<String, Vec<Symbol>>,
}

impl StructureSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first symbol bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.attributes.get(name).and_then(|symbols| symbols.first())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.attributes
            .get_mut(name)
            .and_then(|symbols| symbols.first_mut())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Every function overload stored under `name`, in declaration order.
    pub fn overloads<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a FunctionSymbol> + 'a {
        self.attributes
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(Symbol::as_function)
    }

    pub fn find_overload(
        &self,
        name: &str,
        parameter_types: &[ScalarType],
    ) -> Option<&FunctionSymbol> {
        self.overloads(name)
            .find(|function| function.parameter_types() == parameter_types)
    }

    /// Attribute names with their symbols, sorted by name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &[Symbol])> {
        self.attributes
            .iter()
            .map(|(name, symbols)| (name.as_str(), symbols.as_slice()))
    }

    /// Number of distinct attribute names.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Binds `symbol` under its own name.
    ///
    /// A function joins the overloads already stored under its name. Any
    /// other combination of an existing and a new symbol is a kind collision.
    pub fn add_attribute(&mut self, symbol: Symbol) -> Result<(), SchemaError> {
        match self.attributes.entry(symbol.name().to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(vec![symbol]);
                Ok(())
            }
            Entry::Occupied(mut entry) => {
                let overloadable = entry
                    .get()
                    .iter()
                    .all(|existing| existing.kind() == SymbolKind::Function);
                if overloadable && symbol.kind() == SymbolKind::Function {
                    entry.get_mut().push(symbol);
                    Ok(())
                } else {
                    Err(SchemaError::KindCollision(entry.key().clone()))
                }
            }
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}struct {}", "  ".repeat(depth), self.name)?;
        for symbol in self.attributes.values().flatten() {
            symbol.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for StructureSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

/// One callable signature of a module function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSymbol {
    name: String,
    parameter_types: Vec<ScalarType>,
}

impl FunctionSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_types: Vec<ScalarType>) -> Self {
        Self {
            name: name.into(),
            parameter_types,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[ScalarType] {
        &self.parameter_types
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameter_types
            .iter()
            .map(ScalarType::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "function {}({})", self.name, parameters)
    }
}

/// A scalar attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueSymbol {
    name: String,
    #[serde(rename = "type")]
    value_type: ScalarType,
}

impl ValueSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ScalarType {
        self.value_type
    }
}

/// Element shape of an array or dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IterableElement {
    Scalar(ScalarType),
    Structure(StructureSymbol),
}

/// An array or dictionary attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterableSymbol {
    name: String,
    is_dictionary: bool,
    element: IterableElement,
}

impl IterableSymbol {
    #[must_use]
    pub fn new(name: impl Into<String>, is_dictionary: bool, element: IterableElement) -> Self {
        Self {
            name: name.into(),
            is_dictionary,
            element,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dictionary(&self) -> bool {
        self.is_dictionary
    }

    pub fn element(&self) -> &IterableElement {
        &self.element
    }

    pub fn element_type(&self) -> Option<ScalarType> {
        match &self.element {
            IterableElement::Scalar(t) => Some(*t),
            IterableElement::Structure(_) => None,
        }
    }

    pub fn element_structure(&self) -> Option<&StructureSymbol> {
        match &self.element {
            IterableElement::Structure(s) => Some(s),
            IterableElement::Scalar(_) => None,
        }
    }
}
