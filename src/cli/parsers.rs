use crate::configurations::EndpointTemplate;
use crate::contracts::parse_address;
use alloy::primitives::Address;
use eyre::{Context, Result};

/// `value_parser` to parse a hexadecimal `str` to an `Address`.
pub fn parse_address_arg(value: &str) -> Result<Address> {
    parse_address(value).map_err(Into::into)
}

/// `value_parser` to parse a `str` to an `EndpointTemplate`.
///
/// The template is rendered once with a dummy key, so that a broken template is
/// reported as a usage error.
pub fn parse_endpoint_template(value: &str) -> Result<EndpointTemplate> {
    let template = EndpointTemplate::new(value);
    template
        .render("key")
        .wrap_err("template does not render to a URL")?;
    Ok(template)
}
