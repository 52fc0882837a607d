//! Per-target data-type mapping tables.

use indexmap::IndexMap;

use super::GenericDataType;

/// Inclusive bounds on a requested length, precision, or scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// A requested length for a length-bearing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLength {
    Chars(u32),
    /// Use the mapping's declared unlimited keyword (e.g. `MAX`).
    Unlimited,
}

/// Length/precision/scale arguments to a type-definition request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeParams {
    pub max_length: Option<TypeLength>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

impl TypeParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn length(length: u32) -> Self {
        Self {
            max_length: Some(TypeLength::Chars(length)),
            ..Self::default()
        }
    }

    pub fn unlimited() -> Self {
        Self {
            max_length: Some(TypeLength::Unlimited),
            ..Self::default()
        }
    }

    pub fn decimal(precision: u32, scale: u32) -> Self {
        Self {
            precision: Some(precision),
            scale: Some(scale),
            ..Self::default()
        }
    }
}

/// Binds one [`GenericDataType`] to one target's concrete type syntax.
#[derive(Debug, Clone)]
pub struct DataTypeMapping {
    pub generic: GenericDataType,
    /// Canonical native name, e.g. `VARCHAR` or `decimal`.
    pub native_name: String,
    /// Parameterized variant with `{maxlength}` / `{precision}` /
    /// `{scale}` placeholders, e.g. `VARCHAR({maxlength})`.
    pub template: Option<String>,
    /// Keyword substituted for `{maxlength}` on an unlimited request.
    pub unlimited_keyword: Option<String>,
    pub length_bounds: Option<Bounds>,
    pub precision_bounds: Option<Bounds>,
    pub scale_bounds: Option<Bounds>,
    pub notes: Option<String>,
}

impl DataTypeMapping {
    pub fn new(generic: GenericDataType, native_name: impl Into<String>) -> Self {
        Self {
            generic,
            native_name: native_name.into(),
            template: None,
            unlimited_keyword: None,
            length_bounds: None,
            precision_bounds: None,
            scale_bounds: None,
            notes: None,
        }
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn unlimited(mut self, keyword: impl Into<String>) -> Self {
        self.unlimited_keyword = Some(keyword.into());
        self
    }

    pub fn length_bounds(mut self, min: u32, max: u32) -> Self {
        self.length_bounds = Some(Bounds::new(min, max));
        self
    }

    pub fn precision_bounds(mut self, min: u32, max: u32) -> Self {
        self.precision_bounds = Some(Bounds::new(min, max));
        self
    }

    pub fn scale_bounds(mut self, min: u32, max: u32) -> Self {
        self.scale_bounds = Some(Bounds::new(min, max));
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// All mappings one language or SQL dialect owns, keyed by generic type.
#[derive(Debug, Clone)]
pub struct DataTypeMappingTable {
    target: String,
    mappings: IndexMap<GenericDataType, DataTypeMapping>,
}

impl DataTypeMappingTable {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            mappings: IndexMap::new(),
        }
    }

    /// The language/dialect this table belongs to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Add a mapping, replacing any previous one for the same generic
    /// type.
    pub fn with(mut self, mapping: DataTypeMapping) -> Self {
        self.mappings.insert(mapping.generic, mapping);
        self
    }

    pub fn get(&self, generic: GenericDataType) -> Option<&DataTypeMapping> {
        self.mappings.get(&generic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataTypeMapping> {
        self.mappings.values()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Render the concrete type definition for `generic` with the given
    /// parameters.
    ///
    /// Requested values are clamped to the mapping's declared bounds.
    /// When the table has no mapping for `generic`, the generic type's
    /// display name is returned verbatim, preserved behavior from the
    /// source system, and a known silent degradation.
    pub fn generate_type_def(&self, generic: GenericDataType, params: &TypeParams) -> String {
        let Some(mapping) = self.get(generic) else {
            return generic.display_name().to_string();
        };
        let Some(template) = &mapping.template else {
            return mapping.native_name.clone();
        };

        let mut out = template.clone();

        if out.contains("{maxlength}") {
            let value = match params.max_length {
                Some(TypeLength::Chars(length)) => match mapping.length_bounds {
                    Some(bounds) => bounds.clamp(length).to_string(),
                    None => length.to_string(),
                },
                Some(TypeLength::Unlimited) => match &mapping.unlimited_keyword {
                    Some(keyword) => keyword.clone(),
                    None => return mapping.native_name.clone(),
                },
                None => return mapping.native_name.clone(),
            };
            out = out.replace("{maxlength}", &value);
        }

        if out.contains("{precision}") {
            let Some(precision) = params.precision else {
                return mapping.native_name.clone();
            };
            let precision = mapping
                .precision_bounds
                .map_or(precision, |bounds| bounds.clamp(precision));
            out = out.replace("{precision}", &precision.to_string());
        }

        if out.contains("{scale}") {
            let Some(scale) = params.scale else {
                return mapping.native_name.clone();
            };
            let scale = mapping
                .scale_bounds
                .map_or(scale, |bounds| bounds.clamp(scale));
            out = out.replace("{scale}", &scale.to_string());
        }

        out
    }

    /// Reverse lookup: match concrete type syntax back to its mapping.
    ///
    /// The comparison ignores case and any parameter list on either side,
    /// so `varchar(50)` finds the `VARCHAR` mapping and `NVARCHAR(MAX)`
    /// finds a mapping whose native name already carries parameters. Used
    /// when round-tripping parsed or imported schemas.
    pub fn find_mapping_by_native_type(&self, native: &str) -> Option<&DataTypeMapping> {
        let base = base_name(native);
        self.iter()
            .find(|mapping| base_name(&mapping.native_name).eq_ignore_ascii_case(base))
    }
}

/// The type name with any trailing parameter list stripped.
fn base_name(native: &str) -> &str {
    native.split('(').next().unwrap_or(native).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTypeMappingTable {
        DataTypeMappingTable::new("testdb")
            .with(
                DataTypeMapping::new(GenericDataType::VarChar, "VARCHAR")
                    .template("VARCHAR({maxlength})")
                    .unlimited("MAX")
                    .length_bounds(1, 8000),
            )
            .with(
                DataTypeMapping::new(GenericDataType::Decimal, "DECIMAL")
                    .template("DECIMAL({precision},{scale})")
                    .precision_bounds(1, 38)
                    .scale_bounds(0, 38),
            )
            .with(DataTypeMapping::new(GenericDataType::Int, "INT"))
    }

    #[test]
    fn test_parameter_substitution() {
        let table = table();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::length(50)),
            "VARCHAR(50)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Decimal, &TypeParams::decimal(10, 2)),
            "DECIMAL(10,2)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Int, &TypeParams::none()),
            "INT"
        );
    }

    #[test]
    fn test_unlimited_keyword() {
        let table = table();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::unlimited()),
            "VARCHAR(MAX)"
        );
    }

    #[test]
    fn test_bounds_clamp_requests() {
        let table = table();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::length(20_000)),
            "VARCHAR(8000)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Decimal, &TypeParams::decimal(99, 2)),
            "DECIMAL(38,2)"
        );
    }

    #[test]
    fn test_missing_parameters_fall_back_to_native_name() {
        let table = table();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::none()),
            "VARCHAR"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Decimal, &TypeParams::none()),
            "DECIMAL"
        );
    }

    #[test]
    fn test_unmapped_type_degrades_to_display_name() {
        let table = table();
        assert_eq!(
            table.generate_type_def(GenericDataType::Json, &TypeParams::none()),
            "Json"
        );
    }

    #[test]
    fn test_reverse_lookup() {
        let table = table();
        let mapping = table.find_mapping_by_native_type("varchar(50)").unwrap();
        assert_eq!(mapping.generic, GenericDataType::VarChar);

        let mapping = table.find_mapping_by_native_type("DECIMAL(10,2)").unwrap();
        assert_eq!(mapping.generic, GenericDataType::Decimal);

        assert!(table.find_mapping_by_native_type("BLOB").is_none());
    }

    #[test]
    fn test_reverse_lookup_of_parameterized_native_name() {
        // A native name that itself carries a parameter list must still
        // match its own emitted syntax.
        let table = table().with(DataTypeMapping::new(GenericDataType::Text, "NVARCHAR(MAX)"));

        let emitted = table.generate_type_def(GenericDataType::Text, &TypeParams::none());
        assert_eq!(emitted, "NVARCHAR(MAX)");

        let mapping = table.find_mapping_by_native_type(&emitted).unwrap();
        assert_eq!(mapping.generic, GenericDataType::Text);
    }
}
