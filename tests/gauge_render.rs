//! Cell-level rendering of the gauge on a ratatui buffer.

use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};
use rstest::rstest;
use tui_gauge::ui::canvas::{BufferCanvas, Canvas};
use tui_gauge::ui::widgets::gauge::{
    Gauge, GaugeError, GaugeOption, HorizontalAlign, LineStyle, Size, VerticalAlign,
};

enum Update {
    Percent(i64),
    Absolute(i64, i64),
}

/// Expected buffer contents built from the same primitives the gauge uses.
struct Expect {
    buf: Buffer,
}

impl Expect {
    fn new(width: u16, height: u16) -> Self {
        Self {
            buf: Buffer::empty(Rect::new(0, 0, width, height)),
        }
    }

    fn border(mut self) -> Self {
        let area = self.buf.area;
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .render(area, &mut self.buf);
        self
    }

    fn fill(mut self, x: u16, y: u16, width: u16, height: u16) -> Self {
        BufferCanvas::new(&mut self.buf)
            .fill(
                Rect::new(x, y, width, height),
                ' ',
                Style::default().bg(Color::Green),
            )
            .unwrap();
        self
    }

    fn text(mut self, x: u16, y: u16, text: &str, color: Color) -> Self {
        BufferCanvas::new(&mut self.buf)
            .text(x, y, text, Style::default().fg(color))
            .unwrap();
        self
    }
}

fn render(
    width: u16,
    height: u16,
    construction: &[GaugeOption],
    update: Update,
    options: &[GaugeOption],
) -> Buffer {
    let gauge = Gauge::new(construction);
    match update {
        Update::Percent(p) => gauge.set_percent(p, options),
        Update::Absolute(done, total) => gauge.set_absolute(done, total, options),
    }
    .unwrap();

    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    gauge.draw(&mut BufferCanvas::new(&mut buf)).unwrap();
    buf
}

fn label(text: &str) -> GaugeOption {
    GaugeOption::TextLabel(text.into())
}

#[rstest]
#[case::partial_fill(
    10, 3, vec![], Update::Percent(35), vec![],
    Expect::new(10, 3).fill(0, 0, 3, 3).text(3, 1, "35%", Color::Reset)
)]
#[case::nothing_filled(
    10, 3, vec![], Update::Percent(0), vec![],
    Expect::new(10, 3).text(4, 1, "0%", Color::Reset)
)]
#[case::fully_filled(
    10, 3, vec![], Update::Percent(100), vec![],
    Expect::new(10, 3).fill(0, 0, 10, 3).text(3, 1, "100%", Color::Black)
)]
#[case::absolute_progress(
    10, 3, vec![], Update::Absolute(20, 100), vec![],
    Expect::new(10, 3).fill(0, 0, 2, 3).text(2, 1, "20/100", Color::Reset)
)]
#[case::text_split_at_fill_edge(
    10, 3, vec![label("l")], Update::Percent(50), vec![],
    Expect::new(10, 3)
        .fill(0, 0, 5, 3)
        .text(1, 1, "50% ", Color::Black)
        .text(5, 1, "(l)", Color::Reset)
)]
#[case::long_label_truncated(
    10, 3, vec![label("long label")], Update::Percent(0), vec![],
    Expect::new(10, 3).text(0, 1, "0% (long …", Color::Reset)
)]
#[case::long_label_split_and_truncated(
    10, 3, vec![label("long label")], Update::Percent(50), vec![],
    Expect::new(10, 3)
        .fill(0, 0, 5, 3)
        .text(0, 1, "50% (", Color::Black)
        .text(5, 1, "long…", Color::Reset)
)]
#[case::bordered(
    10, 3, vec![GaugeOption::Border(LineStyle::Light)], Update::Percent(35), vec![],
    Expect::new(10, 3).border().fill(1, 1, 2, 1).text(3, 1, "35%", Color::Reset)
)]
#[case::bordered_long_label(
    10, 3,
    vec![GaugeOption::Border(LineStyle::Light), label("long label")],
    Update::Percent(0), vec![],
    Expect::new(10, 3).border().text(1, 1, "0% (lon…", Color::Reset)
)]
#[case::bordered_long_label_full(
    10, 3,
    vec![GaugeOption::Border(LineStyle::Light), label("long label")],
    Update::Percent(100), vec![],
    Expect::new(10, 3)
        .border()
        .fill(1, 1, 8, 1)
        .text(1, 1, "100% (l…", Color::Black)
)]
#[case::bordered_split(
    10, 4,
    vec![GaugeOption::Border(LineStyle::Light), label("long label")],
    Update::Percent(50), vec![],
    Expect::new(10, 4)
        .border()
        .fill(1, 1, 4, 2)
        .text(1, 1, "50% ", Color::Black)
        .text(5, 1, "(lo…", Color::Reset)
)]
#[case::top_left(
    10, 4,
    vec![
        GaugeOption::HorizontalTextAlign(HorizontalAlign::Left),
        GaugeOption::VerticalTextAlign(VerticalAlign::Top),
    ],
    Update::Percent(0), vec![],
    Expect::new(10, 4).text(0, 0, "0%", Color::Reset)
)]
#[case::top_left_bordered(
    10, 4,
    vec![
        GaugeOption::Border(LineStyle::Light),
        GaugeOption::HorizontalTextAlign(HorizontalAlign::Left),
        GaugeOption::VerticalTextAlign(VerticalAlign::Top),
    ],
    Update::Percent(0), vec![],
    Expect::new(10, 4).border().text(1, 1, "0%", Color::Reset)
)]
#[case::bottom_right(
    10, 4,
    vec![
        GaugeOption::HorizontalTextAlign(HorizontalAlign::Right),
        GaugeOption::VerticalTextAlign(VerticalAlign::Bottom),
    ],
    Update::Percent(0), vec![],
    Expect::new(10, 4).text(8, 3, "0%", Color::Reset)
)]
#[case::bottom_right_bordered(
    10, 4,
    vec![
        GaugeOption::Border(LineStyle::Light),
        GaugeOption::HorizontalTextAlign(HorizontalAlign::Right),
        GaugeOption::VerticalTextAlign(VerticalAlign::Bottom),
    ],
    Update::Percent(0), vec![],
    Expect::new(10, 4).border().text(7, 2, "0%", Color::Reset)
)]
#[case::text_hidden(
    5, 2, vec![GaugeOption::HideTextProgress], Update::Percent(100), vec![],
    Expect::new(5, 2).fill(0, 0, 5, 2)
)]
#[case::label_only(
    10, 3, vec![GaugeOption::HideTextProgress, label("label")], Update::Percent(100), vec![],
    Expect::new(10, 3).fill(0, 0, 10, 3).text(1, 1, "(label)", Color::Black)
)]
#[case::update_overrides_construction(
    10, 3, vec![GaugeOption::HideTextProgress], Update::Percent(0),
    vec![GaugeOption::ShowTextProgress],
    Expect::new(10, 3).text(4, 1, "0%", Color::Reset)
)]
fn draws_cells(
    #[case] width: u16,
    #[case] height: u16,
    #[case] construction: Vec<GaugeOption>,
    #[case] update: Update,
    #[case] options: Vec<GaugeOption>,
    #[case] expected: Expect,
) {
    let buf = render(width, height, &construction, update, &options);
    assert_eq!(buf, expected.buf);
}

#[test]
fn custom_colors_and_fill_char() {
    let gauge = Gauge::new(&[
        GaugeOption::FillChar('#'),
        GaugeOption::FillColor(Color::Blue),
        GaugeOption::FilledTextColor(Color::White),
    ]);
    gauge.set_percent(100, &[]).unwrap();

    let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
    gauge.draw(&mut BufferCanvas::new(&mut buf)).unwrap();

    let symbols: String = (0..6).map(|x| buf.get(x, 0).symbol().to_string()).collect();
    assert_eq!(symbols, "#100%#");
    for x in 0..6 {
        assert_eq!(buf.get(x, 0).bg, Color::Blue);
    }
    assert_eq!(buf.get(1, 0).fg, Color::White);
}

#[test]
fn border_title_and_color() {
    let gauge = Gauge::new(&[
        GaugeOption::Border(LineStyle::Light),
        GaugeOption::BorderColor(Color::Blue),
        GaugeOption::BorderTitle("title".into()),
        GaugeOption::BorderTitleAlign(HorizontalAlign::Right),
        GaugeOption::HideTextProgress,
    ]);

    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
    gauge.draw(&mut BufferCanvas::new(&mut buf)).unwrap();

    let top: String = (0..10).map(|x| buf.get(x, 0).symbol().to_string()).collect();
    assert_eq!(top, "┌───title┐");
    assert_eq!(buf.get(0, 0).fg, Color::Blue);
    assert_eq!(buf.get(5, 0).fg, Color::Blue);
}

#[test]
fn too_small_canvas_is_left_untouched() {
    let gauge = Gauge::new(&[GaugeOption::Border(LineStyle::Light)]);
    gauge.set_percent(50, &[]).unwrap();

    let mut buf = Buffer::empty(Rect::new(0, 0, 2, 2));
    let result = gauge.draw(&mut BufferCanvas::new(&mut buf));

    assert_eq!(
        result,
        Err(GaugeError::Size {
            got: Size::new(2, 2),
            min: Size::new(3, 3),
        })
    );
    assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 2, 2)));
}

#[test]
fn repeated_update_renders_like_a_single_one() {
    let once = Gauge::new(&[label("twice")]);
    once.set_percent(35, &[]).unwrap();
    let twice = Gauge::new(&[label("twice")]);
    twice.set_percent(35, &[]).unwrap();
    twice.set_percent(35, &[]).unwrap();

    let mut first = Buffer::empty(Rect::new(0, 0, 12, 3));
    once.draw(&mut BufferCanvas::new(&mut first)).unwrap();
    let mut second = Buffer::empty(Rect::new(0, 0, 12, 3));
    twice.draw(&mut BufferCanvas::new(&mut second)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn control_characters_in_label_take_one_cell_each() {
    let buf = render(10, 1, &[label("a\nb")], Update::Percent(0), &[]);
    let symbols: String = (0..10).map(|x| buf.get(x, 0).symbol().to_string()).collect();
    assert_eq!(symbols, " 0% (a b) ");
}

#[test]
fn widget_render_clips_to_buffer() {
    let gauge = Gauge::new(&[GaugeOption::Height(1)]);
    gauge.set_percent(100, &[]).unwrap();

    let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
    (&gauge).render(Rect::new(4, 0, 10, 1), &mut buf);

    let symbols: String = (0..8).map(|x| buf.get(x, 0).symbol().to_string()).collect();
    assert_eq!(symbols, "    100%");
    assert_eq!(buf.get(3, 0).bg, Color::Reset);
    assert_eq!(buf.get(4, 0).bg, Color::Green);
}
