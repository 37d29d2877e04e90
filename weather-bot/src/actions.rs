//! Demo actions: simulated weather lookup, current time, and an expression calculator.

use actbot_core::{Action, ActionHandler, ActionParam, ActionSource, ArgMap, ParamType};
use async_trait::async_trait;
use chrono::Local;
use serde_json::{json, Value};
use std::sync::Arc;

/// Simulated per-city temperature ranges (°C). Unknown cities fall back to 10..30.
const CITY_TEMPERATURES: &[(&str, f64, f64)] = &[
    ("new york", 15.0, 30.0),
    ("london", 10.0, 25.0),
    ("tokyo", 18.0, 32.0),
    ("sydney", 20.0, 35.0),
    ("paris", 12.0, 28.0),
    ("berlin", 8.0, 24.0),
    ("moscow", 0.0, 20.0),
    ("dubai", 25.0, 45.0),
    ("mumbai", 24.0, 38.0),
    ("rio de janeiro", 22.0, 36.0),
];

/// Returns a simulated temperature for a city: the midpoint of its range.
pub struct GetWeatherTemperature;

#[async_trait]
impl ActionHandler for GetWeatherTemperature {
    async fn call(&self, args: ArgMap) -> anyhow::Result<Value> {
        let city_name = args["city_name"].as_str().unwrap_or_default().to_string();
        let key = city_name.to_lowercase();

        let (min, max) = CITY_TEMPERATURES
            .iter()
            .find(|(name, _, _)| *name == key)
            .map(|(_, min, max)| (*min, *max))
            .unwrap_or((10.0, 30.0));
        let temperature = (min + max) / 2.0;

        Ok(json!({
            "city": city_name,
            "temperature": temperature,
            "unit": "Celsius",
            "timestamp": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }))
    }
}

/// Returns the current time, labeled with the requested timezone.
pub struct GetTime;

#[async_trait]
impl ActionHandler for GetTime {
    async fn call(&self, args: ArgMap) -> anyhow::Result<Value> {
        let now = Local::now();
        let timezone = args
            .get("timezone")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or("local")
            .to_string();

        Ok(json!({
            "time": now.format("%H:%M:%S").to_string(),
            "date": now.format("%Y-%m-%d").to_string(),
            "timezone": timezone,
            "timestamp": now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }))
    }
}

/// Evaluates an arithmetic expression. An invalid expression is a handler error.
pub struct Calculate;

#[async_trait]
impl ActionHandler for Calculate {
    async fn call(&self, args: ArgMap) -> anyhow::Result<Value> {
        let expression = args["expression"].as_str().unwrap_or_default().to_string();
        let result = eval_expression(&expression)?;
        // Render whole results as integers, like a calculator would.
        let rendered = if result.fract() == 0.0 && result.abs() < 1e15 {
            json!(result as i64)
        } else {
            json!(result)
        };
        Ok(json!({"expression": expression, "result": rendered}))
    }
}

/// Evaluates `+ - * / ^` with parentheses and unary minus over f64.
pub fn eval_expression(expression: &str) -> anyhow::Result<f64> {
    let mut parser = ExprParser {
        chars: expression.chars().collect(),
        pos: 0,
    };
    let value = parser.expr()?;
    parser.skip_whitespace();
    if parser.pos != parser.chars.len() {
        anyhow::bail!("unexpected input at position {}", parser.pos);
    }
    Ok(value)
}

struct ExprParser {
    chars: Vec<char>,
    pos: usize,
}

impl ExprParser {
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> anyhow::Result<f64> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> anyhow::Result<f64> {
        let mut value = self.factor()?;
        loop {
            if self.eat('*') {
                value *= self.factor()?;
            } else if self.eat('/') {
                let divisor = self.factor()?;
                if divisor == 0.0 {
                    anyhow::bail!("division by zero");
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    // Exponentiation is right-associative.
    fn factor(&mut self) -> anyhow::Result<f64> {
        let base = self.unary()?;
        if self.eat('^') {
            let exponent = self.factor()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn unary(&mut self) -> anyhow::Result<f64> {
        if self.eat('-') {
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> anyhow::Result<f64> {
        if self.eat('(') {
            let value = self.expr()?;
            if !self.eat(')') {
                anyhow::bail!("missing closing parenthesis");
            }
            return Ok(value);
        }

        self.skip_whitespace();
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.pos += 1;
        }
        if start == self.pos {
            anyhow::bail!("expected a number at position {}", start);
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse()
            .map_err(|_| anyhow::anyhow!("invalid number '{}'", text))
    }
}

/// The demo action set: weather, time, and calculator.
pub struct WeatherBotActions;

impl ActionSource for WeatherBotActions {
    fn actions(&self) -> Vec<Action> {
        vec![
            Action::new(
                "get_weather_temperature",
                "Get the current weather temperature for a city",
                vec![ActionParam::required("city_name", ParamType::String)
                    .describe("The name of the city to get the weather for")],
                Arc::new(GetWeatherTemperature),
            ),
            Action::new(
                "get_time",
                "Get the current time, optionally for a specific timezone",
                vec![
                    ActionParam::optional("timezone", ParamType::String, Value::Null)
                        .describe("The timezone to get the time for; defaults to local time"),
                ],
                Arc::new(GetTime),
            ),
            Action::new(
                "calculate",
                "Calculate the result of a mathematical expression",
                vec![ActionParam::required("expression", ParamType::String)
                    .describe("The mathematical expression to evaluate")],
                Arc::new(Calculate),
            ),
        ]
    }
}
