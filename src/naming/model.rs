use super::error::{NamingError, NamingResult};
use heck::ToLowerCamelCase;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One segment of a generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Environment,
    Location,
    Instance,
    Name,
    Org,
    ProjAppSvc,
    UnitDept,
    Function,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Environment,
        Category::Location,
        Category::Instance,
        Category::Name,
        Category::Org,
        Category::ProjAppSvc,
        Category::UnitDept,
        Category::Function,
    ];

    fn suffix(self) -> &'static str {
        match self {
            Category::Environment => "Environment",
            Category::Location => "Location",
            Category::Instance => "Instance",
            Category::Name => "Name",
            Category::Org => "Org",
            Category::ProjAppSvc => "ProjAppSvc",
            Category::UnitDept => "UnitDept",
            Category::Function => "Function",
        }
    }

    /// `ResourceLocation`
    pub fn wire_name(self) -> String {
        format!("Resource{}", self.suffix())
    }

    /// `resourceLocation`, the key used in name requests.
    pub fn field_name(self) -> String {
        self.wire_name().to_lower_camel_case()
    }

    /// `ResourceLocations`
    pub fn options_endpoint(self) -> String {
        format!("{}s", self.wire_name())
    }

    /// Accepts `ResourceUnitDept`, `UnitDept` or `unitdept`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        let value = value.strip_prefix("resource").unwrap_or(&value);

        Category::ALL
            .into_iter()
            .find(|category| category.suffix().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Environment => "Environment",
            Category::Location => "Location",
            Category::Instance => "Instance",
            Category::Name => "Name",
            Category::Org => "Organization",
            Category::ProjAppSvc => "Project/Application/Service",
            Category::UnitDept => "Unit/Department",
            Category::Function => "Function",
        };
        f.write_str(label)
    }
}

fn category_list<'de, D>(deserializer: D) -> Result<BTreeSet<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    Ok(raw
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .filter(|item| !item.trim().is_empty())
        .filter_map(|item| {
            let category = Category::parse(item);
            if category.is_none() {
                tracing::debug!("ignoring unknown naming component '{}'", item.trim());
            }
            category
        })
        .collect())
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceTypeDescriptor {
    #[serde(rename = "shortName", alias = "ShortName")]
    pub short_name: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default, deserialize_with = "category_list")]
    pub optional: BTreeSet<Category>,
    #[serde(default, deserialize_with = "category_list")]
    pub exclude: BTreeSet<Category>,
    #[serde(default, rename = "regx")]
    pub pattern: Option<String>,
    #[serde(default, rename = "validText")]
    pub valid_text: Option<String>,
    #[serde(default, rename = "invalidText")]
    pub invalid_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentOption {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: String,
}

impl ComponentOption {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
        }
    }
}

impl fmt::Display for ComponentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.short_name)
    }
}

/// Chosen short code per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSelection(BTreeMap<Category, String>);

impl ComponentSelection {
    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        self.0.insert(category, value.into());
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.0.get(&category).map(String::as_str)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }

    /// Entries with a non-empty value.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(category, value)| (*category, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedComponents {
    pub required: BTreeSet<Category>,
    pub optional: BTreeSet<Category>,
    pub descriptor: ResourceTypeDescriptor,
}

impl ResolvedComponents {
    pub fn from_descriptor(descriptor: ResourceTypeDescriptor) -> Self {
        let optional: BTreeSet<Category> = descriptor
            .optional
            .difference(&descriptor.exclude)
            .copied()
            .collect();

        let required = Category::ALL
            .into_iter()
            .filter(|category| !descriptor.exclude.contains(category))
            .filter(|category| !optional.contains(category))
            .collect();

        Self {
            required,
            optional,
            descriptor,
        }
    }

    pub fn resolve(types: Vec<ResourceTypeDescriptor>, short_name: &str) -> NamingResult<Self> {
        types
            .into_iter()
            .find(|rt| rt.short_name.eq_ignore_ascii_case(short_name.trim()))
            .map(Self::from_descriptor)
            .ok_or_else(|| NamingError::UnknownResourceType(short_name.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NameRequest<'a> {
    pub resource_type: &'a str,
    #[serde(flatten)]
    pub components: BTreeMap<String, &'a str>,
    pub custom_components: BTreeMap<String, String>,
    pub resource_id: u64,
    pub created_by: &'a str,
}

impl<'a> NameRequest<'a> {
    pub fn new(
        resource_type: &'a str,
        selections: &'a ComponentSelection,
        created_by: &'a str,
    ) -> Self {
        Self {
            resource_type,
            components: selections
                .iter()
                .map(|(category, value)| (category.field_name(), value))
                .collect(),
            custom_components: BTreeMap::new(),
            resource_id: 0,
            created_by,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NameResponse {
    #[serde(rename = "resourceName", default)]
    pub resource_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjAppSvcRequest<'a> {
    pub name: &'a str,
    pub short_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedName {
    Success(String),
    Collision,
    Failure,
}

impl GeneratedName {
    pub(crate) fn classify(response: &NameResponse) -> Self {
        if let Some(name) = response.resource_name.as_deref().filter(|n| !n.is_empty()) {
            return GeneratedName::Success(name.to_string());
        }

        match response.message.as_deref() {
            Some(message) if message.contains("already exists") => GeneratedName::Collision,
            Some(message) => {
                tracing::warn!("naming service rejected request: {message}");
                GeneratedName::Failure
            }
            None => GeneratedName::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(optional: &str, exclude: &str) -> ResourceTypeDescriptor {
        serde_json::from_value(json!({
            "ShortName": "func",
            "resource": "Web/sites - Function App",
            "optional": optional,
            "exclude": exclude,
            "regx": "^[a-z0-9-]{2,60}$",
        }))
        .unwrap()
    }

    #[test]
    fn category_names_follow_wire_format() {
        assert_eq!(Category::Location.wire_name(), "ResourceLocation");
        assert_eq!(Category::ProjAppSvc.field_name(), "resourceProjAppSvc");
        assert_eq!(Category::UnitDept.options_endpoint(), "ResourceUnitDepts");
    }

    #[test]
    fn category_parse_accepts_prefixed_and_bare_names() {
        assert_eq!(Category::parse("ResourceUnitDept"), Some(Category::UnitDept));
        assert_eq!(Category::parse(" org "), Some(Category::Org));
        assert_eq!(Category::parse("Resource"), None);
        assert_eq!(Category::parse("Region"), None);
    }

    #[test]
    fn required_is_all_minus_excluded_minus_optional() {
        let resolved = ResolvedComponents::from_descriptor(descriptor(
            "ResourceUnitDept,ResourceFunction",
            "ResourceOrg,ResourceName",
        ));

        let expected: BTreeSet<Category> = [
            Category::Environment,
            Category::Location,
            Category::Instance,
            Category::ProjAppSvc,
        ]
        .into_iter()
        .collect();

        assert_eq!(resolved.required, expected);
        assert_eq!(
            resolved.optional,
            [Category::UnitDept, Category::Function].into_iter().collect()
        );
        assert!(resolved.required.is_disjoint(&resolved.optional));
    }

    #[test]
    fn required_and_optional_never_overlap() {
        let lists = ["", "Org", "Org,Function", "Location,Instance,Name", "UnitDept,Org"];

        for optional in lists {
            for exclude in lists {
                let resolved = ResolvedComponents::from_descriptor(descriptor(optional, exclude));
                let d = &resolved.descriptor;

                assert!(resolved.required.is_disjoint(&resolved.optional));
                for category in Category::ALL {
                    let expected = !d.exclude.contains(&category) && !d.optional.contains(&category);
                    assert_eq!(resolved.required.contains(&category), expected);
                }
            }
        }
    }

    #[test]
    fn null_lists_mean_everything_required() {
        let rt: ResourceTypeDescriptor = serde_json::from_value(json!({
            "shortName": "rg",
            "optional": null,
        }))
        .unwrap();

        let resolved = ResolvedComponents::from_descriptor(rt);
        assert_eq!(resolved.required.len(), Category::ALL.len());
        assert!(resolved.optional.is_empty());
        assert!(resolved.descriptor.pattern.is_none());
    }

    #[test]
    fn resolve_matches_short_name_case_insensitively() {
        let types = vec![descriptor("", ""), {
            let mut rt = descriptor("", "");
            rt.short_name = "rg".into();
            rt
        }];

        let resolved = ResolvedComponents::resolve(types.clone(), "RG").unwrap();
        assert_eq!(resolved.descriptor.short_name, "rg");

        let missing = ResolvedComponents::resolve(types, "kv");
        assert!(matches!(missing, Err(NamingError::UnknownResourceType(name)) if name == "kv"));
    }

    #[test]
    fn request_body_skips_empty_components() {
        let mut selections = ComponentSelection::default();
        selections.set(Category::Location, "eus");
        selections.set(Category::Instance, "2");
        selections.set(Category::Org, "");

        let body = serde_json::to_value(NameRequest::new("func", &selections, "ARMover")).unwrap();

        assert_eq!(
            body,
            json!({
                "resourceType": "func",
                "resourceLocation": "eus",
                "resourceInstance": "2",
                "customComponents": {},
                "resourceId": 0,
                "createdBy": "ARMover",
            })
        );
    }

    #[test]
    fn classify_name_responses() {
        let parse = |value| serde_json::from_value::<NameResponse>(value).unwrap();

        assert_eq!(
            GeneratedName::classify(&parse(json!({"resourceName": "func-hpa-eus-1", "success": true}))),
            GeneratedName::Success("func-hpa-eus-1".into())
        );
        assert_eq!(
            GeneratedName::classify(&parse(json!({
                "resourceName": "",
                "message": "Resource name already exists",
            }))),
            GeneratedName::Collision
        );
        assert_eq!(
            GeneratedName::classify(&parse(json!({"message": "Invalid location"}))),
            GeneratedName::Failure
        );
        assert_eq!(GeneratedName::classify(&parse(json!({}))), GeneratedName::Failure);
    }
}
