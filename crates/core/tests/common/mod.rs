use stache_api::{InvokeError, ParamKind, Record, TypeShape, Value, Visibility};
use stache_core::{AccessorCache, ScopeResolver};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[allow(dead_code)]
pub fn resolver() -> ScopeResolver {
    ScopeResolver::new(Arc::new(AccessorCache::new()))
}

#[allow(dead_code)]
pub fn json_scopes(values: Vec<serde_json::Value>) -> Vec<Value> {
    values.into_iter().map(Value::from).collect()
}

/// `Report` exposing only `getTitle()`.
#[allow(dead_code)]
pub fn report(title: &str) -> Value {
    let shape = TypeShape::builder("Report")
        .method("getTitle", Visibility::Public)
        .build();
    let title = title.to_string();
    Value::object(Record::new(shape).with_method("getTitle", move |_| Ok(Value::str(&title))))
}

/// `Customer extends Person` with a mix of member kinds.
#[allow(dead_code)]
pub fn customer(name: &str, city: &str) -> Value {
    let person = TypeShape::builder("Person")
        .field("name", Visibility::Public)
        .field("ssn", Visibility::Private)
        .method("isAdult", Visibility::Public)
        .build();
    let customer = TypeShape::builder("Customer")
        .extends(person)
        .method("address", Visibility::Package)
        .method_with("orders", Visibility::Public, vec![ParamKind::List])
        .build();

    let address = Value::map([("city", Value::str(city))]);
    Value::object(
        Record::new(customer)
            .with_field("name", name)
            .with_field("ssn", "000-00-0000")
            .with_method("isAdult", |_| Ok(Value::Bool(true)))
            .with_method("address", move |_| Ok(address.clone()))
            .with_method("orders", |args| match args {
                [Value::List(filters)] => Ok(Value::Int(filters.len() as i64)),
                _ => Err(InvokeError::failed("Customer", "orders", "expected a list")),
            }),
    )
}

/// `Gauge` whose `getReading()` fails once `broken` is set.
#[allow(dead_code)]
pub fn gauge(broken: Arc<AtomicBool>) -> Value {
    let shape = TypeShape::builder("Gauge")
        .method("getReading", Visibility::Public)
        .build();
    Value::object(Record::new(shape).with_method("getReading", move |_| {
        if broken.load(Ordering::SeqCst) {
            Err(InvokeError::failed("Gauge", "getReading", "sensor offline"))
        } else {
            Ok(Value::Int(42))
        }
    }))
}
