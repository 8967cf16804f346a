use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Keeps resources from loading while a view renders; reset on drop so a
/// failing assertion does not leak the flag into the next test.
struct SuppressResources;

impl SuppressResources {
    fn enable() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuppressResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Renders `view` to HTML inside a fresh reactive runtime. Anything the view
/// needs from context (session, view model) is set up inside the closure.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _suppress = SuppressResources::enable();
    with_runtime(|| view().into_view().render_to_string().to_string())
}
