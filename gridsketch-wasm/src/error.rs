use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

/// The edit would repeat an existing point or line.
#[inline]
pub fn duplicate(kind: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "kind", &JsValue::from_str(kind));
    err("duplicate", format!("{} already exists", kind), Some(d.into()))
}

#[inline]
pub fn self_loop(point: u32) -> JsValue {
    let d = new_obj(); set_kv(&d, "point", &JsValue::from_f64(point as f64));
    err("self_loop", "line endpoints must differ", Some(d.into()))
}

#[inline]
pub fn invalid_config(reason: impl Into<String>) -> JsValue {
    err("invalid_config", reason, None)
}
