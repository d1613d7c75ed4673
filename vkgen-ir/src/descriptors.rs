//! Descriptors for schema entities.

use serde::Serialize;
use vkgen_core::NamingTitle;

use crate::TypeReference;

/// Which schema section an entity came from; selects its output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Objects,
    Responses,
}

impl Category {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Objects => "objects",
            Category::Responses => "responses",
        }
    }
}

/// A property of a class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: NamingTitle,
    pub ty: TypeReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: NamingTitle::new(name.into()),
            ty,
            description: None,
        }
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// A property bag, possibly extending other classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDescriptor {
    pub title: NamingTitle,
    pub scope: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Own properties until flattened, then the complete set.
    pub properties: Vec<PropertyDescriptor>,
    /// Direct bases in declaration order, without duplicates.
    pub base_class_names: Vec<String>,
    /// Once set, `properties` is self-contained.
    pub is_flattened: bool,
}

impl ClassDescriptor {
    pub fn new(title: impl Into<String>, scope: impl Into<String>, category: Category) -> Self {
        Self {
            title: NamingTitle::new(title.into()),
            scope: scope.into(),
            category,
            description: None,
            properties: Vec::new(),
            base_class_names: Vec::new(),
            is_flattened: false,
        }
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a base class, ignoring repeats.
    pub fn base(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.base_class_names.contains(&name) {
            self.base_class_names.push(name);
        }
        self
    }

    /// The wire name of this class.
    pub fn name(&self) -> &str {
        self.title.wire()
    }
}

/// How enum values are written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumRepr {
    String,
    Integer,
}

/// One member of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    /// Source of the member identifier (the wire value, or its `enumNames` entry).
    pub title: NamingTitle,
    pub wire_value: String,
    /// 0-based declaration index.
    pub ordinal: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDescriptor {
    pub title: NamingTitle,
    pub scope: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub repr: EnumRepr,
    pub members: Vec<EnumMember>,
}

impl EnumDescriptor {
    pub fn new(
        title: impl Into<String>,
        scope: impl Into<String>,
        category: Category,
        repr: EnumRepr,
    ) -> Self {
        Self {
            title: NamingTitle::new(title.into()),
            scope: scope.into(),
            category,
            description: None,
            repr,
            members: Vec::new(),
        }
    }

    /// Append a member; its ordinal is the current member count.
    pub fn member(self, name: impl Into<String>, wire_value: impl Into<String>) -> Self {
        let ordinal = self.members.len();
        self.member_at(ordinal, name, wire_value)
    }

    /// Append a member with an explicit declaration index.
    pub fn member_at(
        mut self,
        ordinal: usize,
        name: impl Into<String>,
        wire_value: impl Into<String>,
    ) -> Self {
        self.members.push(EnumMember {
            title: NamingTitle::new(name.into()),
            wire_value: wire_value.into(),
            ordinal,
            description: None,
        });
        self
    }

    pub fn name(&self) -> &str {
        self.title.wire()
    }
}

/// A named non-object type, such as a response wrapping a bare integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasDescriptor {
    pub title: NamingTitle,
    pub scope: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target: TypeReference,
}

impl AliasDescriptor {
    pub fn name(&self) -> &str {
        self.title.wire()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodParameterDescriptor {
    pub title: NamingTitle,
    pub ty: TypeReference,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A callable API method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDescriptor {
    /// Full wire name, e.g. `friends.get`.
    pub title: NamingTitle,
    /// Local part of the wire name, e.g. `get`.
    pub name: NamingTitle,
    pub scope: String,
    pub response_type: TypeReference,
    pub parameters: Vec<MethodParameterDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarKind;

    #[test]
    fn test_enum_ordinals_follow_declaration() {
        let en = EnumDescriptor::new("groups_group_is_closed", "groups", Category::Objects, EnumRepr::Integer)
            .member("open", "0")
            .member("closed", "1")
            .member("private", "2");

        let ordinals: Vec<_> = en.members.iter().map(|m| m.ordinal).collect();
        assert_eq!(ordinals, [0, 1, 2]);
        assert_eq!(en.members[2].wire_value, "2");
    }

    #[test]
    fn test_class_bases_are_deduplicated() {
        let class = ClassDescriptor::new("users_user", "users", Category::Objects)
            .base("users_user_min")
            .base("users_user_min")
            .base("base_object")
            .property(PropertyDescriptor::new("online", TypeReference::scalar(ScalarKind::Bool)));

        assert_eq!(class.base_class_names, ["users_user_min", "base_object"]);
        assert_eq!(class.name(), "users_user");
        assert!(!class.is_flattened);
    }
}
