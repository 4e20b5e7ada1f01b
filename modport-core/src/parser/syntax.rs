//! Structural model produced by a front end

/// One parsed compilation unit.
///
/// Both lists are in document order and include nested declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    pub type_decls: Vec<TypeDecl>,
    pub methods: Vec<MethodDecl>,
}

/// A class, interface, enum or record declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub annotations: Vec<Annotation>,
}

/// A method declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub annotations: Vec<Annotation>,
    /// Declared parameter types, as written in source
    pub parameter_types: Vec<String>,
    /// Body text including the enclosing braces; `None` for abstract methods
    pub body: Option<String>,
}

/// An annotation with its key/value arguments.
///
/// Values are kept as raw source text (string literals keep their quotes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Name as written, e.g. `Mod` or `Mod.EventHandler`
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Annotation {
    /// Last dotted segment of the name
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Check the simple name against any of `names`
    pub fn is_any(&self, names: &[&str]) -> bool {
        names.contains(&self.simple_name())
    }

    /// Look up the raw value of an attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl MethodDecl {
    pub fn has_annotation(&self, names: &[&str]) -> bool {
        self.annotations.iter().any(|a| a.is_any(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        let plain = Annotation { name: "Mod".to_string(), attributes: vec![] };
        let scoped = Annotation { name: "Mod.EventHandler".to_string(), attributes: vec![] };
        let qualified = Annotation {
            name: "net.minecraftforge.fml.common.eventhandler.SubscribeEvent".to_string(),
            attributes: vec![],
        };
        assert_eq!(plain.simple_name(), "Mod");
        assert_eq!(scoped.simple_name(), "EventHandler");
        assert_eq!(qualified.simple_name(), "SubscribeEvent");
        assert!(qualified.is_any(&["SubscribeEvent", "EventHandler"]));
    }
}
