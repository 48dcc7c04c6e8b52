//! Property-based test suites.

mod clean_text_props;
mod render_props;
mod slug_props;
