use mcpgen_core::descriptor::ScalarType;

/// Map a scalar parameter type to its Python annotation.
pub fn scalar_to_python(ty: ScalarType) -> &'static str {
    match ty {
        ScalarType::String => "str",
        ScalarType::Integer => "int",
        ScalarType::Boolean => "bool",
        ScalarType::Number => "float",
    }
}

/// Render one signature entry. Optional parameters default to `None`, the
/// sentinel the generated body checks for before wiring a query value.
pub fn signature_entry(name: &str, ty: ScalarType, required: bool) -> String {
    let base = scalar_to_python(ty);
    if required {
        format!("{name}: {base}")
    } else {
        format!("{name}: {base} | None = None")
    }
}
