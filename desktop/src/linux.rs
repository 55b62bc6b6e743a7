use {
    anyhow::Context as _,
    tracing::debug,
    x11rb::{
        connection::Connection,
        protocol::xproto::{ConnectionExt, InputFocus, Window},
        rust_connection::RustConnection,
        CURRENT_TIME, NONE,
    },
};

pub struct Context {
    connection: RustConnection,
    root: Window,
}

impl Context {
    pub fn new() -> anyhow::Result<Self> {
        let (connection, screen_num) = x11rb::connect(None)?;
        let root = connection
            .setup()
            .roots
            .get(screen_num)
            .with_context(|| format!("X screen {screen_num} not found"))?
            .root;
        Ok(Self { connection, root })
    }

    pub fn focus_under_pointer(&self, _context: &crate::Context) -> anyhow::Result<()> {
        let pointer = self.connection.query_pointer(self.root)?.reply()?;
        if pointer.child == NONE {
            debug!("no window under the pointer");
            return Ok(());
        }
        self.connection
            .set_input_focus(InputFocus::NONE, pointer.child, CURRENT_TIME)?;
        self.connection.flush()?;
        debug!("focused window {}", pointer.child);
        Ok(())
    }
}
