use alder_rpc::{InvokeError, MethodRegistry, Processor, Signature};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize tracing subscriber to see structured logs
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();
}

fn main() {
    init_tracing();

    let registry = MethodRegistry::new()
        .register(
            "sum",
            Signature::new().required("a").required("b"),
            |args| {
                let a = args[0].as_f64().unwrap_or(0.0);
                let b = args[1].as_f64().unwrap_or(0.0);
                Ok(json!(a + b))
            },
        )
        .register(
            "divide",
            Signature::new().required("dividend").required("divisor"),
            |args| {
                let dividend = args[0].as_f64().unwrap_or(0.0);
                let divisor = args[1].as_f64().unwrap_or(0.0);
                if divisor == 0.0 {
                    return Err(InvokeError::new("division by zero"));
                }
                Ok(json!(dividend / divisor))
            },
        )
        .register(
            "round",
            Signature::new().required("value").optional("digits"),
            |args| {
                let value = args[0].as_f64().unwrap_or(0.0);
                let digits = args.get(1).and_then(|v| v.as_u64()).unwrap_or(0) as i32;
                let scale = 10f64.powi(digits);
                Ok(json!((value * scale).round() / scale))
            },
        );

    let processor = Processor::new(registry);

    let requests = [
        // plain positional call
        r#"{"jsonrpc":"2.0","method":"sum","params":[2,3],"id":1}"#,
        // named params, optional supplied
        r#"{"jsonrpc":"2.0","method":"round","params":{"value":3.14159,"digits":2},"id":2}"#,
        // named params, optional omitted
        r#"{"jsonrpc":"2.0","method":"round","params":{"value":3.14159},"id":3}"#,
        // invocation failure surfaces as Internal error
        r#"{"jsonrpc":"2.0","method":"divide","params":{"dividend":1,"divisor":0},"id":4}"#,
        // notification: produces no output at all
        r#"{"jsonrpc":"2.0","method":"sum","params":[1,1]}"#,
        // batch with a notification in the middle
        r#"[
            {"jsonrpc":"2.0","method":"sum","params":[1,2],"id":5},
            {"jsonrpc":"2.0","method":"sum","params":[3,4]},
            {"jsonrpc":"2.0","method":"missing","id":6}
        ]"#,
        // not even json
        "{oops",
    ];

    for request in requests {
        println!("--> {}", request);
        let output = processor.process(request);
        if output.is_empty() {
            println!("<-- (no response)");
        } else {
            println!("<-- {}", output);
        }
    }
}
