//! Argument validation against an action's declared parameter schema.

use actbot_core::{Action, ArgMap};

/// Fills declared defaults, coerces present values to their declared types where
/// unambiguous, and rejects a missing required parameter (returning its name).
/// Arguments not named in the schema are passed through unchanged.
pub fn validate_args(action: &Action, mut args: ArgMap) -> Result<ArgMap, String> {
    for param in &action.parameters {
        match args.remove(&param.name) {
            Some(value) if !value.is_null() => {
                args.insert(param.name.clone(), param.param_type.coerce(value));
            }
            _ => match &param.default {
                Some(default) => {
                    args.insert(param.name.clone(), default.clone());
                }
                None if param.required => return Err(param.name.clone()),
                None => {}
            },
        }
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actbot_core::{ActionHandler, ActionParam, ParamType};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct NoopHandler;

    #[async_trait]
    impl ActionHandler for NoopHandler {
        async fn call(&self, _args: ArgMap) -> anyhow::Result<Value> {
            Ok(json!(null))
        }
    }

    fn weather_action() -> Action {
        Action::new(
            "get_weather_temperature",
            "Get the temperature for a city",
            vec![
                ActionParam::required("city_name", ParamType::String),
                ActionParam::optional("unit", ParamType::String, json!("celsius")),
            ],
            Arc::new(NoopHandler),
        )
    }

    #[test]
    fn test_missing_required_names_parameter() {
        let err = validate_args(&weather_action(), ArgMap::new()).unwrap_err();
        assert_eq!(err, "city_name");
    }

    #[test]
    fn test_default_filled_in() {
        let mut args = ArgMap::new();
        args.insert("city_name".to_string(), json!("London"));
        let validated = validate_args(&weather_action(), args).unwrap();
        assert_eq!(validated["unit"], json!("celsius"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut args = ArgMap::new();
        args.insert("city_name".to_string(), json!(null));
        let err = validate_args(&weather_action(), args).unwrap_err();
        assert_eq!(err, "city_name");
    }

    #[test]
    fn test_coercion_applied_to_declared_types() {
        let action = Action::new(
            "repeat",
            "Repeat a word",
            vec![
                ActionParam::required("word", ParamType::String),
                ActionParam::required("times", ParamType::Integer),
            ],
            Arc::new(NoopHandler),
        );

        let mut args = ArgMap::new();
        args.insert("word".to_string(), json!("hi"));
        args.insert("times".to_string(), json!("3"));
        let validated = validate_args(&action, args).unwrap();
        assert_eq!(validated["times"], json!(3));
    }

    #[test]
    fn test_undeclared_arguments_pass_through() {
        let mut args = ArgMap::new();
        args.insert("city_name".to_string(), json!("Tokyo"));
        args.insert("verbose".to_string(), json!(true));
        let validated = validate_args(&weather_action(), args).unwrap();
        assert_eq!(validated["verbose"], json!(true));
    }
}
