//! Status Bar Widget
//!
//! Bottom line: `[timestamp] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.right().saturating_sub(1);
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                format!("[{}] ", vm.timestamp),
                usize::from(right - x),
                vm.metadata_style,
            );
            x = next_x;
        }

        let (next_x, _) = buf.set_stringn(
            x,
            area.y,
            format!("{} ", vm.emoji),
            usize::from(right.saturating_sub(x)),
            vm.message_style,
        );
        x = next_x;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;
        let message_end = right.saturating_sub(source_width + 1);
        if message_end > x {
            buf.set_stringn(
                x,
                area.y,
                &vm.message,
                usize::from(message_end - x),
                vm.message_style,
            );
        }

        if !source.is_empty() && right > source_width + x {
            buf.set_string(right - source_width, area.y, &source, vm.metadata_style);
        }
    }
}
