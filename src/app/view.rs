use super::messages::Message;
use super::state::{App, CHROME_RESERVED_HEIGHT, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::catalog::{PageEntry, Sheet};
use crate::flip::spread_sheets;
use crate::layout::{self, SizingSpec};
use crate::media::{PageMedia, PLACEHOLDER_ART};
use crate::overlay::ClipPlacement;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, column, container, mouse_area, progress_bar, row, slider, stack, text,
};
use iced::{ContentFit, Element, Length, Padding};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let is_mobile = self.is_mobile_width();
        let spec = SizingSpec::from_config(&self.config);
        let book_height = (self.ui.window_height - CHROME_RESERVED_HEIGHT).max(0.0);
        let page = layout::compute_page_size(&spec, self.ui.window_width, book_height, is_mobile);
        let page_width = page.width * self.ui.zoom;
        let page_height = page.height * self.ui.zoom;

        let (left, right) = if is_mobile {
            (self.pager.current_page, None)
        } else {
            spread_sheets(self.pager.current_page, self.pager.total_pages)
        };

        let mut spread = row![].spacing(2).align_y(Vertical::Center);
        spread = spread.push(self.sheet_view(left, page_width, page_height));
        if let Some(right) = right {
            spread = spread.push(self.sheet_view(right, page_width, page_height));
        }

        let book = container(spread)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        let mut content = column![book, self.control_bar()]
            .spacing(10)
            .padding(14);
        if self.ui.menu_open {
            content = content.push(self.menu_panel());
        }
        if self.ui.bookmark_panel_open {
            content = content.push(self.bookmark_panel());
        }
        content.into()
    }

    fn sheet_view(&self, index: usize, width: f32, height: f32) -> Element<'_, Message> {
        match self.catalog.sheet(index) {
            Some(Sheet::FrontCover) => {
                self.cover_view(self.catalog.title(), self.catalog.byline(), width, height)
            }
            Some(Sheet::BackCover) => self.cover_view("The End", "Thanks for reading", width, height),
            Some(Sheet::Entry(entry)) => self.page_view(index, entry, width, height),
            None => container(text(""))
                .width(width)
                .height(height)
                .into(),
        }
    }

    fn cover_view(
        &self,
        title: &str,
        subtitle: &str,
        width: f32,
        height: f32,
    ) -> Element<'_, Message> {
        container(
            column![
                text(title.to_string()).size(28),
                text(subtitle.to_string()).size(14),
            ]
            .spacing(12)
            .align_x(Horizontal::Center),
        )
        .style(container::rounded_box)
        .width(width)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }

    fn page_view(
        &self,
        index: usize,
        entry: &PageEntry,
        width: f32,
        height: f32,
    ) -> Element<'_, Message> {
        let art: Element<'_, Message> = match self.ui.media.get(&index) {
            Some(PageMedia::Ready(handle)) => Image::new(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Cover)
                .into(),
            Some(PageMedia::Video) => self.placeholder_view("Video panel", width, height),
            Some(PageMedia::Missing { page }) => {
                self.placeholder_view(&format!("Page {page}"), width, height)
            }
            None => self.placeholder_view(&format!("Page {index}"), width, height),
        };

        let mut layers = stack![container(art).width(width).height(height)];

        let is_current = index == self.pager.current_page;
        if is_current && !entry.is_video() {
            if let Some(clip) = &entry.clip {
                let placement = ClipPlacement::from_overlay(clip);
                let (clip_left, clip_top, clip_width, clip_height) =
                    placement.resolve(width, height);
                layers = layers.push(
                    container(
                        container(text("Clip").size(12))
                            .style(container::rounded_box)
                            .width(clip_width)
                            .height(clip_height)
                            .align_x(Horizontal::Center)
                            .align_y(Vertical::Center),
                    )
                    .padding(Padding {
                        top: clip_top,
                        right: 0.0,
                        bottom: 0.0,
                        left: clip_left,
                    })
                    .width(width)
                    .height(height),
                );
            }
        }

        if is_current && self.overlay_visible() {
            if let Some(src) = &entry.dialogue_overlay {
                let handle = Handle::from_path(self.catalog.resolve(src));
                layers = layers.push(
                    container(
                        Image::new(handle)
                            .width(width)
                            .height(height)
                            .content_fit(ContentFit::Contain),
                    )
                    .width(width)
                    .height(height),
                );
            }
        }

        let sheet: Element<'_, Message> = layers.width(width).height(height).into();
        if is_current {
            mouse_area(sheet)
                .on_enter(Message::PageHovered(true))
                .on_exit(Message::PageHovered(false))
                .on_press(Message::PagePressed)
                .on_release(Message::PageReleased)
                .into()
        } else {
            sheet
        }
    }

    fn placeholder_view(&self, label: &str, width: f32, height: f32) -> Element<'_, Message> {
        stack![
            Image::new(PLACEHOLDER_ART.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Cover),
            container(text(label.to_string()).size(20))
                .width(width)
                .height(height)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        ]
        .width(width)
        .height(height)
        .into()
    }

    fn control_bar(&self) -> Element<'_, Message> {
        let current = self.pager.current_page;
        let total = self.pager.total_pages;
        let percent = (self.pager.progress() * 100.0).round();

        row![
            button("Previous").on_press_maybe((current > 0).then_some(Message::PreviousPage)),
            button("Next").on_press_maybe((current + 1 < total).then_some(Message::NextPage)),
            text(format!("{} / {}", current + 1, total)).size(14),
            progress_bar(0.0..=1.0, self.pager.progress())
                .width(Length::Fill)
                .height(8),
            text(format!("{percent:.0}%")).size(12),
            button(if self.ui.muted { "Unmute" } else { "Mute" }).on_press(Message::ToggleMute),
            button(if self.overlay.globally_visible {
                "Hide dialogue"
            } else {
                "Show dialogue"
            })
            .on_press(Message::ToggleDialogueOverlays),
            button(if self.ui.fullscreen {
                "Windowed"
            } else {
                "Fullscreen"
            })
            .on_press(Message::ToggleFullscreen),
            button(if self.ui.menu_open { "Close" } else { "Menu" }).on_press(Message::ToggleMenu),
        ]
        .spacing(8)
        .align_y(Vertical::Center)
        .into()
    }

    fn menu_panel(&self) -> Element<'_, Message> {
        let zoom_percent = (self.ui.zoom * 100.0).round();
        let last = self.pager.total_pages.saturating_sub(1);
        container(
            row![
                button("Start").on_press(Message::JumpToStart),
                button("End").on_press(Message::JumpToEnd),
                text("Page").size(12),
                slider(
                    0.0..=last as f32,
                    self.pager.current_page as f32,
                    |value| Message::JumpToPage(value.round() as usize),
                )
                .step(1.0)
                .width(140),
                button("Bookmarks").on_press(Message::ToggleBookmarkPanel),
                button(match self.config.theme {
                    crate::config::ThemeMode::Day => "Night mode",
                    crate::config::ThemeMode::Night => "Day mode",
                })
                .on_press(Message::ToggleTheme),
                text("Volume").size(12),
                slider(0.0..=1.0, self.ui.volume, Message::VolumeChanged)
                    .step(0.01)
                    .width(120),
                button("-").on_press(Message::ZoomOut),
                text(format!("{zoom_percent:.0}%")).size(12),
                button("+").on_press(Message::ZoomIn),
                slider(MIN_ZOOM..=MAX_ZOOM, self.ui.zoom, Message::ZoomChanged)
                    .step(ZOOM_STEP)
                    .width(120),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
        )
        .style(container::rounded_box)
        .padding(10)
        .width(Length::Fill)
        .into()
    }

    fn bookmark_panel(&self) -> Element<'_, Message> {
        let status: Element<'_, Message> = match self.ui.stored_bookmark {
            Some(bookmark) => row![
                text(format!("Bookmarked page {}", bookmark.page + 1)).size(14),
                button("Open").on_press(Message::JumpToBookmark),
            ]
            .spacing(8)
            .align_y(Vertical::Center)
            .into(),
            None => text("No bookmark yet").size(14).into(),
        };
        container(
            row![
                status,
                button("Bookmark this page").on_press(Message::BookmarkCurrentPage),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .style(container::rounded_box)
        .padding(10)
        .width(Length::Fill)
        .into()
    }
}
