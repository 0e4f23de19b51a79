//! Human-readable rendering
//!
//! Variants without a codec fail with `NotSupported`; `Value` therefore has
//! no `Display` impl.

use crate::core::value::Value;
use crate::error::{CodecError, CodecResult};

impl Value {
    /// Render this value as text.
    ///
    /// ```
    /// use cadence_value::Value;
    ///
    /// let v = Value::array([Value::int(1), Value::fix64(150_000_000)]);
    /// assert_eq!(v.to_display_string().unwrap(), "[1,1.50000000]");
    /// ```
    pub fn to_display_string(&self) -> CodecResult<String> {
        Ok(match self {
            Self::Void => "Void".to_owned(),
            Self::Optional(None) => "Optional[nil]".to_owned(),
            Self::Optional(Some(inner)) => format!("Optional[{}]", inner.to_display_string()?),
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
            Self::Address(a) => a.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Fix64(f) => f.to_string(),
            Self::UFix64(f) => f.to_string(),
            Self::Array(items) => {
                let parts = items
                    .iter()
                    .map(Value::to_display_string)
                    .collect::<CodecResult<Vec<_>>>()?;
                format!("[{}]", parts.join(","))
            }
            Self::Dictionary(dict) => {
                let parts = dict
                    .iter()
                    .map(|pair| -> CodecResult<String> {
                        Ok(format!(
                            "{{{}:{}}}",
                            pair.key.to_display_string()?,
                            pair.value.to_display_string()?
                        ))
                    })
                    .collect::<CodecResult<Vec<_>>>()?;
                format!("{{{}}}", parts.join(","))
            }
            Self::Custom(c) => c.inner().to_display_string()?,
            Self::Word(_)
            | Self::Contract
            | Self::Link
            | Self::Path
            | Self::TypeValue
            | Self::Capability => {
                return Err(CodecError::not_supported(self.type_tag(), "display"));
            }
        })
    }
}
