//! Charts Panel Component
//!
//! Bar and pie views of the equipment type distribution. Uses ECharts for
//! visualization via wasm-bindgen JS interop.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local as spawn;

// ─────────────────────────────────────────────────────────────────────────────
// ECharts JS Interop
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> JsValue;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn echarts_get_instance(dom: &web_sys::Element) -> JsValue;
}

const CHART_BAR: &str = "chart-type-bar";
const CHART_PIE: &str = "chart-type-share";

fn init_chart(element_id: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let element = document.get_element_by_id(element_id)?;

    // Reuse an existing instance rather than double-initializing the node
    let existing = echarts_get_instance(&element);
    if !existing.is_null() && !existing.is_undefined() {
        return Some(existing);
    }

    Some(echarts_init(&element))
}

/// Invoke a zero- or one-argument method on a chart instance, ignoring
/// failures (the instance may already be disposed).
fn call_chart_method(chart: &JsValue, name: &str, arg: Option<&JsValue>) {
    let method = js_sys::Reflect::get(chart, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(func) = method {
        let _ = match arg {
            Some(arg) => func.call1(chart, arg),
            None => func.call0(chart),
        };
    }
}

fn set_chart_option(chart: &JsValue, option: &JsValue) {
    call_chart_method(chart, "setOption", Some(option));
}

fn resize_all_charts() {
    for id in [CHART_BAR, CHART_PIE] {
        if let Some(window) = web_sys::window()
            && let Some(document) = window.document()
            && let Some(element) = document.get_element_by_id(id)
        {
            let instance = echarts_get_instance(&element);
            if !instance.is_null() && !instance.is_undefined() {
                call_chart_method(&instance, "resize", None);
            }
        }
    }
}

fn dispose_chart(element_id: &str) {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(element_id)
    {
        let instance = echarts_get_instance(&element);
        if !instance.is_null() && !instance.is_undefined() {
            call_chart_method(&instance, "dispose", None);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Builders
// ─────────────────────────────────────────────────────────────────────────────

/// Brand color cycle shared by both charts, in fixed order.
const BRAND_COLORS: [&str; 6] = [
    "#1a2a6c", // navy
    "#b21f1f", // crimson
    "#006400", // forest
    "#b8860b", // ochre
    "#4b0082", // indigo
    "#2f4f4f", // slate
];

fn obj_set(obj: &js_sys::Object, key: &str, value: &JsValue) {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value).unwrap();
}

fn palette_array() -> js_sys::Array {
    BRAND_COLORS.iter().map(|c| JsValue::from_str(c)).collect()
}

fn build_bar_option(distribution: &BTreeMap<String, u64>) -> JsValue {
    let obj = js_sys::Object::new();

    obj_set(&obj, "color", &palette_array());

    let tooltip = js_sys::Object::new();
    obj_set(&tooltip, "trigger", &JsValue::from_str("axis"));
    obj_set(&obj, "tooltip", &tooltip);

    // Leave room for axis labels
    let grid = js_sys::Object::new();
    obj_set(&grid, "left", &JsValue::from_str("45"));
    obj_set(&grid, "right", &JsValue::from_str("20"));
    obj_set(&grid, "top", &JsValue::from_str("20"));
    obj_set(&grid, "bottom", &JsValue::from_str("30"));
    obj_set(&obj, "grid", &grid);

    let labels = js_sys::Array::new();
    let values = js_sys::Array::new();
    for (label, count) in distribution {
        labels.push(&JsValue::from_str(label));
        values.push(&JsValue::from_f64(*count as f64));
    }

    let x_axis = js_sys::Object::new();
    obj_set(&x_axis, "type", &JsValue::from_str("category"));
    obj_set(&x_axis, "data", &labels);
    let x_label = js_sys::Object::new();
    obj_set(&x_label, "color", &JsValue::from_str("#64748b"));
    obj_set(&x_axis, "axisLabel", &x_label);
    obj_set(&obj, "xAxis", &x_axis);

    // Counts start at zero; hide gridlines
    let y_axis = js_sys::Object::new();
    obj_set(&y_axis, "type", &JsValue::from_str("value"));
    obj_set(&y_axis, "min", &JsValue::from_f64(0.0));
    let y_split = js_sys::Object::new();
    obj_set(&y_split, "show", &JsValue::FALSE);
    obj_set(&y_axis, "splitLine", &y_split);
    obj_set(&obj, "yAxis", &y_axis);

    // One bar per equipment type, one palette color per bar
    let series = js_sys::Object::new();
    obj_set(&series, "type", &JsValue::from_str("bar"));
    obj_set(&series, "name", &JsValue::from_str("Units"));
    obj_set(&series, "data", &values);
    obj_set(&series, "colorBy", &JsValue::from_str("data"));
    let item_style = js_sys::Object::new();
    obj_set(&item_style, "borderRadius", &JsValue::from_f64(5.0));
    obj_set(&series, "itemStyle", &item_style);
    let series_arr = js_sys::Array::new();
    series_arr.push(&series);
    obj_set(&obj, "series", &series_arr);

    obj_set(&obj, "animationDuration", &JsValue::from_f64(2000.0));
    obj_set(&obj, "animationEasing", &JsValue::from_str("quartOut"));

    obj.into()
}

fn build_pie_option(distribution: &BTreeMap<String, u64>) -> JsValue {
    let obj = js_sys::Object::new();

    obj_set(&obj, "color", &palette_array());

    let tooltip = js_sys::Object::new();
    obj_set(&tooltip, "trigger", &JsValue::from_str("item"));
    obj_set(&obj, "tooltip", &tooltip);

    let legend = js_sys::Object::new();
    obj_set(&legend, "bottom", &JsValue::from_str("0"));
    let legend_text = js_sys::Object::new();
    obj_set(&legend_text, "color", &JsValue::from_str("#64748b"));
    obj_set(&legend, "textStyle", &legend_text);
    obj_set(&obj, "legend", &legend);

    let data = js_sys::Array::new();
    for (label, count) in distribution {
        let slice = js_sys::Object::new();
        obj_set(&slice, "name", &JsValue::from_str(label));
        obj_set(&slice, "value", &JsValue::from_f64(*count as f64));
        data.push(&slice);
    }

    // Scale-in entrance mirrors the rotate-and-grow reveal of the bar's
    // ease-out rise
    let series = js_sys::Object::new();
    obj_set(&series, "type", &JsValue::from_str("pie"));
    obj_set(&series, "name", &JsValue::from_str("Share"));
    obj_set(&series, "radius", &JsValue::from_str("68%"));
    obj_set(&series, "data", &data);
    obj_set(&series, "animationType", &JsValue::from_str("scale"));
    let series_arr = js_sys::Array::new();
    series_arr.push(&series);
    obj_set(&obj, "series", &series_arr);

    obj_set(&obj, "animationDuration", &JsValue::from_f64(2000.0));
    obj_set(&obj, "animationEasing", &JsValue::from_str("quartOut"));

    obj.into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn ChartsPanel(distribution: BTreeMap<String, u64>) -> Element {
    // Mirror the prop into a signal so the draw effect re-runs if the parent
    // swaps distributions without remounting the panel
    let mut dist_signal = use_signal(|| distribution.clone());
    if *dist_signal.read() != distribution {
        dist_signal.set(distribution.clone());
    }

    // Draw both charts when the distribution changes
    use_effect(move || {
        let dist = dist_signal.read().clone();

        spawn(async move {
            // Delay to ensure DOM elements exist after render
            gloo_timers::future::TimeoutFuture::new(150).await;

            if !dist.is_empty()
                && let Some(chart) = init_chart(CHART_BAR)
            {
                set_chart_option(&chart, &build_bar_option(&dist));
            }

            if !dist.is_empty()
                && let Some(chart) = init_chart(CHART_PIE)
            {
                set_chart_option(&chart, &build_pie_option(&dist));
            }

            // Resize after the DOM has settled
            gloo_timers::future::TimeoutFuture::new(50).await;
            resize_all_charts();
        });
    });

    // Window resize listener - resize all ECharts instances
    use_effect(|| {
        use wasm_bindgen::closure::Closure;

        let closure = Closure::wrap(Box::new(move || {
            resize_all_charts();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }

        // Keep closure alive for the lifetime of the page
        closure.forget();
    });

    // Cleanup charts on unmount
    use_drop(move || {
        dispose_chart(CHART_BAR);
        dispose_chart(CHART_PIE);
    });

    rsx! {
        div { class: "charts-row",
            div { class: "panel chart-panel wide",
                if distribution.is_empty() {
                    div { class: "chart-empty", "No type distribution in dataset" }
                } else {
                    div { id: CHART_BAR, class: "chart-container" }
                }
            }
            div { class: "panel chart-panel",
                if distribution.is_empty() {
                    div { class: "chart-empty", "No type distribution in dataset" }
                } else {
                    div { id: CHART_PIE, class: "chart-container" }
                }
            }
        }
    }
}
