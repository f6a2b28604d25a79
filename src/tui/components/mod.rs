//! # TUI Components
//!
//! All components are stateless: they receive the data they draw as props
//! (struct fields) and are rebuilt every frame from `App`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── headline.rs      (Prompt / loading / temperature / error line)
//! └── input_box/       (City field)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod headline;
pub use headline::Headline;
pub mod input_box;
pub use input_box::InputBox;
