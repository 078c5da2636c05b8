mod theme;

pub use theme::{Palette, Theme};

use crate::app::ReaderSession;
use anyhow::Result;
use gpui::{
    App, Application, Bounds, Context as GpuiContext, Div, FontWeight, KeyBinding, Render,
    SharedString, Stateful, StatefulInteractiveElement, TitlebarOptions, Window, WindowBounds,
    WindowOptions, actions, div, prelude::*, px, relative, rgb, size,
};
use log::{error, warn};
use std::rc::Rc;

actions!(pagereader, [PrevPageAction, NextPageAction]);

pub const UNAVAILABLE_NOTICE: &str = "Book not found or no content available.";

pub trait UiRuntime {
    fn run(self, session: ReaderSession) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct GpuiRuntime;

struct ReaderView {
    session: ReaderSession,
    theme: Theme,
}

/// Owned snapshot of the label and page area for one frame.
struct PageDisplay {
    selected: String,
    header: Option<String>,
    paragraphs: Vec<String>,
    notice: Option<&'static str>,
}

impl PageDisplay {
    fn from_session(session: &ReaderSession) -> Self {
        match session.current_page() {
            Ok(Some(view)) => Self {
                selected: format!("Selected eBook: {}", view.title),
                header: Some(format!("Page {} / {}", view.page_number, view.page_count)),
                paragraphs: split_paragraphs(view.content),
                notice: None,
            },
            Ok(None) => Self {
                selected: "Selected eBook: ".to_string(),
                header: None,
                paragraphs: Vec::new(),
                notice: None,
            },
            Err(unavailable) => Self {
                selected: format!("Selected eBook: {}", unavailable.title),
                header: None,
                paragraphs: Vec::new(),
                notice: Some(UNAVAILABLE_NOTICE),
            },
        }
    }
}

fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|block| !block.is_empty())
        .collect()
}

impl ReaderView {
    fn new(session: ReaderSession) -> Self {
        let theme = session.config.theme;
        Self { session, theme }
    }

    /// Re-renders after a command and logs when the new position has nothing
    /// to show.
    fn refresh(&self, cx: &mut GpuiContext<Self>) {
        if let Err(unavailable) = self.session.current_page() {
            warn!("{unavailable}");
        }
        cx.notify();
    }

    fn button(
        cx: &mut GpuiContext<Self>,
        palette: &Palette,
        label: &str,
        enabled: bool,
        handler: impl Fn(&mut Self, &mut GpuiContext<Self>) + 'static,
    ) -> Stateful<Div> {
        let mut button = div()
            .id(SharedString::from(format!("button-{label}")))
            .px_3()
            .py_1()
            .rounded_sm()
            .border_1()
            .border_color(rgb(palette.border))
            .bg(rgb(palette.button))
            .text_sm()
            .text_color(rgb(palette.button_text));

        if enabled {
            button = button
                .cursor_pointer()
                .active(|this| this.opacity(0.85))
                .on_click(cx.listener(move |this, _, _, cx| {
                    handler(this, cx);
                }));
        } else {
            button = button.opacity(0.4);
        }

        button.child(label.to_string())
    }

    fn book_selector(&mut self, cx: &mut GpuiContext<Self>, palette: &Palette) -> Stateful<Div> {
        let selected = self.session.state.selected_title().map(str::to_string);
        let titles: Vec<String> = self
            .session
            .titles()
            .into_iter()
            .map(str::to_string)
            .collect();

        let rows: Vec<_> = titles
            .into_iter()
            .enumerate()
            .map(|(index, title)| {
                let is_selected = selected.as_deref() == Some(title.as_str());
                let mut row = div()
                    .id(SharedString::from(format!("book-{index}")))
                    .px_3()
                    .py_1()
                    .text_sm()
                    .cursor_pointer();
                if is_selected {
                    row = row.bg(rgb(palette.selection));
                }
                let label = title.clone();
                row.on_click(cx.listener(move |this, _, _, cx| {
                    this.session.select_book(&title);
                    this.refresh(cx);
                }))
                .child(label)
            })
            .collect();

        let list = if rows.is_empty() {
            div()
                .px_3()
                .py_1()
                .text_sm()
                .text_color(rgb(palette.muted_text))
                .child("The catalog has no books.")
        } else {
            div().flex().flex_col().children(rows)
        };

        div()
            .id("book-selector")
            .max_h(px(140.))
            .overflow_y_scroll()
            .rounded_sm()
            .border_1()
            .border_color(rgb(palette.border))
            .bg(rgb(palette.page))
            .text_color(rgb(palette.page_text))
            .child(list)
    }

    fn page_area(display: &PageDisplay, palette: &Palette) -> Stateful<Div> {
        let mut page = div()
            .id("page-content")
            .flex()
            .flex_col()
            .flex_grow()
            .min_h(px(0.))
            .overflow_y_scroll()
            .gap_3()
            .p_4()
            .rounded_md()
            .bg(rgb(palette.page))
            .text_color(rgb(palette.page_text));

        if let Some(header) = &display.header {
            page = page.child(
                div()
                    .flex()
                    .justify_center()
                    .font_weight(FontWeight::BOLD)
                    .child(header.clone()),
            );
        }

        if let Some(notice) = display.notice {
            page = page.child(div().text_sm().text_color(rgb(palette.notice)).child(notice));
        } else if display.header.is_none() {
            page = page.child(
                div()
                    .text_sm()
                    .text_color(rgb(palette.muted_text))
                    .child("Pick a book to start reading."),
            );
        }

        page.children(display.paragraphs.iter().map(|paragraph| {
            div()
                .text_sm()
                .line_height(relative(1.6))
                .child(paragraph.clone())
        }))
    }

    fn navigation(&mut self, cx: &mut GpuiContext<Self>, palette: &Palette) -> Div {
        let has_prev = self.session.has_previous();
        let has_next = self.session.has_next();
        let toggle_label = self.theme.toggle_label();

        div()
            .flex()
            .gap_3()
            .items_center()
            .child(Self::button(cx, palette, "Previous", has_prev, |this, cx| {
                if this.session.previous_page() {
                    this.refresh(cx);
                }
            }))
            .child(Self::button(cx, palette, "Next Page", has_next, |this, cx| {
                if this.session.next_page() {
                    this.refresh(cx);
                }
            }))
            .child(div().flex_grow())
            .child(Self::button(cx, palette, "Exit", true, |_, cx| {
                cx.quit();
            }))
            .child(Self::button(cx, palette, toggle_label, true, |this, cx| {
                this.theme = this.theme.toggle();
                cx.notify();
            }))
    }

    fn handle_prev_action(
        &mut self,
        _: &PrevPageAction,
        _window: &mut Window,
        cx: &mut GpuiContext<Self>,
    ) {
        if self.session.previous_page() {
            self.refresh(cx);
        }
    }

    fn handle_next_action(
        &mut self,
        _: &NextPageAction,
        _window: &mut Window,
        cx: &mut GpuiContext<Self>,
    ) {
        if self.session.next_page() {
            self.refresh(cx);
        }
    }
}

impl Render for ReaderView {
    fn render(&mut self, _window: &mut Window, cx: &mut GpuiContext<Self>) -> impl IntoElement {
        let palette = self.theme.palette();
        let display = PageDisplay::from_session(&self.session);

        div()
            .flex()
            .flex_col()
            .size_full()
            .p_4()
            .gap_3()
            .bg(rgb(palette.window))
            .text_color(rgb(palette.text))
            .key_context("ReaderView")
            .child(
                div()
                    .flex()
                    .justify_center()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("Choose a book"),
            )
            .child(self.book_selector(cx, &palette))
            .child(div().text_sm().child(display.selected.clone()))
            .child(Self::page_area(&display, &palette))
            .child(self.navigation(cx, &palette))
    }
}

impl UiRuntime for GpuiRuntime {
    fn run(self, session: ReaderSession) -> Result<()> {
        Application::new().run(move |app: &mut App| {
            let window_size = size(
                px(session.config.window_width),
                px(session.config.window_height),
            );
            let window_bounds = Bounds::centered(None, window_size, app);
            let window_title = SharedString::from(session.config.window_title.clone());
            let reader_handle = match app.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some(window_title),
                        ..Default::default()
                    }),
                    window_bounds: Some(WindowBounds::Windowed(window_bounds)),
                    ..Default::default()
                },
                {
                    let session_for_window = session.clone();
                    move |_, cx| {
                        let view_session = session_for_window.clone();
                        cx.new(|_| ReaderView::new(view_session))
                    }
                },
            ) {
                Ok(handle) => Rc::new(handle),
                Err(err) => {
                    error!("failed to open reader window: {err:?}");
                    return;
                }
            };

            app.bind_keys([
                KeyBinding::new("left", PrevPageAction, Some("ReaderView")),
                KeyBinding::new("right", NextPageAction, Some("ReaderView")),
            ]);

            {
                let handle = Rc::clone(&reader_handle);
                app.on_action(move |action: &PrevPageAction, app| {
                    let action = action.clone();
                    let _ = handle.update(app, |view, window, cx| {
                        view.handle_prev_action(&action, window, cx);
                    });
                });
            }

            {
                let handle = Rc::clone(&reader_handle);
                app.on_action(move |action: &NextPageAction, app| {
                    let action = action.clone();
                    let _ = handle.update(app, |view, window, cx| {
                        view.handle_next_action(&action, window, cx);
                    });
                });
            }

            app.activate(true);
        });

        Ok(())
    }
}
