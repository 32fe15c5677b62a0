use serde::Serialize;

/// A type exposed on the module, registered in two phases: a forward
/// declaration creates a stub, a later definition fills in the members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBinding {
    pub name: String,
    pub members: Vec<String>,
    pub defined: bool,
}

impl TypeBinding {
    /// A forward-declared stub with no members yet.
    pub fn stub(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
            defined: false,
        }
    }

    /// A fully defined binding.
    pub fn defined(name: &str, members: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            defined: true,
        }
    }

    pub fn is_stub(&self) -> bool {
        !self.defined
    }
}

/// A value published as a module attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Type(TypeBinding),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeBinding> {
        match self {
            AttrValue::Type(t) => Some(t),
            _ => None,
        }
    }
}
