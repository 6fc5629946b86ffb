// Application state and iced GUI implementation

use crate::convert::{
    format_number, is_empty_quantity, parse_quantity, px_to_rem, rem_to_px, DEFAULT_DECIMALS,
    TABLE_DECIMALS,
};
use crate::store::{MemoryMedium, PrefStore, SqliteMedium, StorageMedium};
use crate::theme::{
    COLOR_CONVERTED, COLOR_MUTED, FONT_LG, FONT_MD, FONT_SM, FONT_XL, MAX_INPUT_LENGTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, TABLE_HEIGHT,
};
use crate::types::{ConversionDirection, ThemeChoice, WhichSide};
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, scrollable, text,
    text_input, vertical_space, Column,
};
use iced::{clipboard, Center, Element, Fill, Task, Theme};
use log::warn;

pub const CURRENT_THEME_KEY: &str = "current-theme";
pub const ROOT_FONT_SIZE_KEY: &str = "root-font-size";
pub const DFLT_ROOT_FONT_SIZE: f64 = 16.0;

// Lookup values rendered in the static conversion tables
const TABLE_PX_VALUES: &[f64] = &[
    1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0, 36.0, 40.0,
    48.0, 56.0, 64.0, 72.0, 80.0, 96.0,
];
const TABLE_REM_VALUES: &[f64] = &[
    0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0, 3.5, 4.0,
    4.5, 5.0, 6.0, 8.0, 10.0,
];

pub struct PxRemConverter {
    direction: ConversionDirection,
    // Canonical quantity in pixels; both fields derive from it
    pixels: Option<f64>,
    left_text: String,
    right_text: String,
    edited_side: Option<WhichSide>,
    root_font_size: f64,
    font_size_text: String,
    theme_choice: ThemeChoice,
    store: PrefStore,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputEdited(WhichSide, String),
    SwapDirection,
    RootFontSizeChanged(String),
    ToggleTheme,
    CopyValue(WhichSide),
}

impl PxRemConverter {
    // Creates new app instance, loads persisted preferences
    pub fn new() -> (Self, Task<Message>) {
        let medium: Box<dyn StorageMedium> = match SqliteMedium::open_default() {
            Ok(medium) => Box::new(medium),
            Err(err) => {
                warn!("preferences will not persist: {err}");
                Box::new(MemoryMedium::default())
            }
        };
        (Self::with_store(PrefStore::new(medium)), Task::none())
    }

    fn with_store(mut store: PrefStore) -> Self {
        let theme_choice = store.read(CURRENT_THEME_KEY, ThemeChoice::default());
        let root_font_size = store.read(ROOT_FONT_SIZE_KEY, DFLT_ROOT_FONT_SIZE);
        Self {
            direction: ConversionDirection::default(),
            pixels: None,
            left_text: String::new(),
            right_text: String::new(),
            edited_side: None,
            root_font_size,
            font_size_text: format_number(Some(root_font_size), DEFAULT_DECIMALS),
            theme_choice,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        match self.theme_choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    // Handles all application messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputEdited(side, raw) => {
                if raw.len() > MAX_INPUT_LENGTH {
                    return Task::none();
                }
                self.edited_side = Some(side);
                self.set_side_text(side, raw.clone());

                if raw.is_empty() {
                    self.pixels = None;
                    self.set_side_text(side.other(), String::new());
                    return Task::none();
                }

                self.pixels = parse_quantity(&raw).map(|entered| {
                    if self.side_is_px(side) {
                        entered
                    } else {
                        entered * self.root_font_size
                    }
                });
                self.refresh_side(side.other());
                Task::none()
            }
            Message::SwapDirection => {
                self.direction = self.direction.toggled();
                self.refresh_side(WhichSide::Left);
                self.refresh_side(WhichSide::Right);
                Task::none()
            }
            Message::RootFontSizeChanged(raw) => {
                if raw.len() > MAX_INPUT_LENGTH {
                    return Task::none();
                }
                self.font_size_text = raw;
                // The root must stay strictly positive; anything else
                // falls back to the default base size
                self.root_font_size = parse_quantity(&self.font_size_text)
                    .filter(|size| *size > 0.0)
                    .unwrap_or(DFLT_ROOT_FONT_SIZE);
                self.store.write(ROOT_FONT_SIZE_KEY, self.root_font_size);
                self.refresh_side(WhichSide::Left);
                self.refresh_side(WhichSide::Right);
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme_choice = self.theme_choice.toggled();
                self.store.write(CURRENT_THEME_KEY, self.theme_choice);
                Task::none()
            }
            Message::CopyValue(side) => {
                let value = self.side_text(side).to_owned();
                if value.is_empty() {
                    Task::none()
                } else {
                    clipboard::write(value)
                }
            }
        }
    }

    // True when `side` currently holds pixels
    fn side_is_px(&self, side: WhichSide) -> bool {
        matches!(
            (side, self.direction),
            (WhichSide::Left, ConversionDirection::PxToRem)
                | (WhichSide::Right, ConversionDirection::RemToPx)
        )
    }

    fn side_text(&self, side: WhichSide) -> &str {
        match side {
            WhichSide::Left => &self.left_text,
            WhichSide::Right => &self.right_text,
        }
    }

    fn set_side_text(&mut self, side: WhichSide, text: String) {
        match side {
            WhichSide::Left => self.left_text = text,
            WhichSide::Right => self.right_text = text,
        }
    }

    // Re-derives one field from the canonical pixel value
    fn refresh_side(&mut self, side: WhichSide) {
        let text = if self.side_is_px(side) {
            match self.pixels {
                Some(px) if !is_empty_quantity(px) => format_number(Some(px), DEFAULT_DECIMALS),
                _ => String::new(),
            }
        } else {
            px_to_rem(self.root_font_size, self.pixels, DEFAULT_DECIMALS)
        };
        self.set_side_text(side, text);
    }

    // Renders main application view
    pub fn view(&self) -> Element<'_, Message> {
        container(
            column![
                self.view_header(),
                vertical_space().height(SPACING_MD),
                self.view_converter(),
                vertical_space().height(SPACING_MD),
                self.view_font_size_setter(),
                vertical_space().height(SPACING_MD),
                self.view_tables(),
            ]
            .padding(SPACING_LG),
        )
        .width(Fill)
        .height(Fill)
        .into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let theme_label = match self.theme_choice {
            ThemeChoice::Dark => "Light Mode",
            ThemeChoice::Light => "Dark Mode",
        };
        row![
            text(format!("{} converter", self.direction)).size(FONT_XL),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .align_y(Center)
        .into()
    }

    fn view_converter(&self) -> Element<'_, Message> {
        row![
            self.view_input(WhichSide::Left),
            button("⇄").on_press(Message::SwapDirection),
            self.view_input(WhichSide::Right),
        ]
        .spacing(SPACING_LG)
        .align_y(Center)
        .into()
    }

    fn view_input(&self, side: WhichSide) -> Element<'_, Message> {
        let label = if self.side_is_px(side) { "Pixels" } else { "REM" };
        let label = if self.edited_side == Some(side.other()) {
            text(label).size(FONT_SM).color(COLOR_CONVERTED)
        } else {
            text(label).size(FONT_SM)
        };
        column![
            label,
            row![
                text_input("0", self.side_text(side))
                    .on_input(move |raw| Message::InputEdited(side, raw))
                    .width(160),
                button("Copy").on_press(Message::CopyValue(side)),
            ]
            .spacing(SPACING_SM),
        ]
        .spacing(SPACING_SM)
        .into()
    }

    fn view_font_size_setter(&self) -> Element<'_, Message> {
        row![
            text("Calculation based on a root font-size of").size(FONT_MD),
            text_input("16", &self.font_size_text)
                .on_input(Message::RootFontSizeChanged)
                .width(70),
            text("pixel.").size(FONT_MD),
        ]
        .spacing(SPACING_SM)
        .align_y(Center)
        .into()
    }

    fn view_tables(&self) -> Element<'_, Message> {
        let px_rows: Vec<Element<'_, Message>> = TABLE_PX_VALUES
            .iter()
            .map(|&px| {
                Self::table_row(
                    format_number(Some(px), TABLE_DECIMALS),
                    "px",
                    px_to_rem(self.root_font_size, Some(px), TABLE_DECIMALS),
                    "rem",
                )
            })
            .collect();
        let rem_rows: Vec<Element<'_, Message>> = TABLE_REM_VALUES
            .iter()
            .map(|&rem| {
                Self::table_row(
                    format_number(Some(rem), TABLE_DECIMALS),
                    "rem",
                    rem_to_px(self.root_font_size, rem, TABLE_DECIMALS),
                    "px",
                )
            })
            .collect();

        column![
            text("PX ↔ REM conversion tables").size(FONT_LG),
            horizontal_rule(1),
            scrollable(
                row![
                    Self::view_table("Pixels", "REM", px_rows),
                    Self::view_table("REM", "Pixels", rem_rows),
                ]
                .spacing(SPACING_LG)
            )
            .height(TABLE_HEIGHT),
        ]
        .spacing(SPACING_MD)
        .into()
    }

    fn view_table(
        left_header: &'static str,
        right_header: &'static str,
        rows: Vec<Element<'static, Message>>,
    ) -> Element<'static, Message> {
        column![
            row![
                text(left_header).size(FONT_MD).width(Fill),
                text(right_header).size(FONT_MD).width(Fill),
            ],
            Column::with_children(rows).spacing(SPACING_XS),
        ]
        .spacing(SPACING_SM)
        .width(Fill)
        .into()
    }

    fn table_row(
        value: String,
        unit: &'static str,
        converted: String,
        converted_unit: &'static str,
    ) -> Element<'static, Message> {
        row![
            row![
                text(value).size(FONT_SM),
                text(unit).size(FONT_SM).color(COLOR_MUTED),
            ]
            .spacing(SPACING_XS)
            .width(Fill),
            row![
                text(converted).size(FONT_SM),
                text(converted_unit).size(FONT_SM).color(COLOR_MUTED),
            ]
            .spacing(SPACING_XS)
            .width(Fill),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> PxRemConverter {
        PxRemConverter::with_store(PrefStore::new(Box::new(MemoryMedium::default())))
    }

    fn app_over(medium: MemoryMedium) -> PxRemConverter {
        PxRemConverter::with_store(PrefStore::new(Box::new(medium)))
    }

    #[test]
    fn editing_the_px_side_derives_rem() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Left, "32".into()));

        assert_eq!(app.pixels, Some(32.0));
        assert_eq!(app.left_text, "32");
        assert_eq!(app.right_text, "2");
    }

    #[test]
    fn editing_the_rem_side_derives_px() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Right, "2".into()));

        assert_eq!(app.pixels, Some(32.0));
        assert_eq!(app.left_text, "32");
    }

    #[test]
    fn left_side_holds_rem_after_swap() {
        let mut app = test_app();
        let _ = app.update(Message::SwapDirection);
        let _ = app.update(Message::InputEdited(WhichSide::Left, "2".into()));

        assert_eq!(app.pixels, Some(32.0));
        assert_eq!(app.right_text, "32");
    }

    #[test]
    fn swapping_re_derives_both_fields() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Left, "32".into()));
        let _ = app.update(Message::SwapDirection);

        assert_eq!(app.left_text, "2");
        assert_eq!(app.right_text, "32");
    }

    #[test]
    fn clearing_an_input_clears_the_other_side() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Left, "32".into()));
        let _ = app.update(Message::InputEdited(WhichSide::Left, String::new()));

        assert_eq!(app.pixels, None);
        assert_eq!(app.right_text, "");
    }

    #[test]
    fn non_numeric_input_counts_as_no_value() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Left, "abc".into()));

        assert_eq!(app.pixels, None);
        assert_eq!(app.right_text, "");
    }

    #[test]
    fn zero_pixels_renders_the_derived_side_empty() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Left, "0".into()));

        assert_eq!(app.pixels, Some(0.0));
        assert_eq!(app.left_text, "0");
        assert_eq!(app.right_text, "");
    }

    #[test]
    fn oversized_input_is_ignored() {
        let mut app = test_app();
        let _ = app.update(Message::InputEdited(WhichSide::Left, "9".repeat(100)));

        assert_eq!(app.left_text, "");
        assert_eq!(app.pixels, None);
    }

    #[test]
    fn root_font_size_change_re_derives_and_persists() {
        let medium = MemoryMedium::default();
        let mut app = app_over(medium.clone());

        let _ = app.update(Message::InputEdited(WhichSide::Left, "36".into()));
        let _ = app.update(Message::RootFontSizeChanged("18".into()));

        assert_eq!(app.root_font_size, 18.0);
        assert_eq!(app.right_text, "2");

        let reloaded = app_over(medium);
        assert_eq!(reloaded.root_font_size, 18.0);
    }

    #[test]
    fn invalid_root_font_size_falls_back_to_default() {
        let mut app = test_app();

        let _ = app.update(Message::RootFontSizeChanged("0".into()));
        assert_eq!(app.root_font_size, DFLT_ROOT_FONT_SIZE);

        let _ = app.update(Message::RootFontSizeChanged("abc".into()));
        assert_eq!(app.root_font_size, DFLT_ROOT_FONT_SIZE);
    }

    #[test]
    fn theme_toggle_persists_across_reload() {
        let medium = MemoryMedium::default();
        let mut app = app_over(medium.clone());

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_choice, ThemeChoice::Dark);

        let reloaded = app_over(medium);
        assert_eq!(reloaded.theme_choice, ThemeChoice::Dark);
    }
}
