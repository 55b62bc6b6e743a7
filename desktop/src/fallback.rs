pub struct Context;

impl Context {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }

    // Clicking the window under the pointer is the portable way to focus it.
    pub fn focus_under_pointer(&self, context: &crate::Context) -> anyhow::Result<()> {
        context.mouse_left_click()
    }
}
