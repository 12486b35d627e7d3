use seedbrush::svg::{
    color_attribute, create_element, rgb_value, svg_attributes, url_value,
};
use seedbrush::{Color, ColorAttribute};

const ZERO_ONE_TWO: Color = Color::rgb(0x00, 0x01, 0x02);

#[test]
fn generates_svg_attributes() {
    assert_eq!(
        svg_attributes(180, 360),
        " viewBox='0 0 180 360' xmlns='http://www.w3.org/2000/svg'"
    );
}

#[test]
fn generates_path_element() {
    assert_eq!(create_element("path", "", ""), "<path/>");
    assert_eq!(create_element("path", " id='name'", ""), "<path id='name'/>");
    assert_eq!(create_element("path", "", "contents"), "<path>contents</path>");
    assert_eq!(
        create_element("path", " id='name'", "contents"),
        "<path id='name'>contents</path>"
    );
}

#[test]
fn generates_rgb_values() {
    assert_eq!(rgb_value(Color::rgb(0, 0, 0)), "rgb(0,0,0)");
    assert_eq!(rgb_value(Color::rgb(1, 1, 1)), "rgb(1,1,1)");
    assert_eq!(rgb_value(ZERO_ONE_TWO), "rgb(0,1,2)");
    assert_eq!(rgb_value(Color::rgb(255, 255, 255)), "rgb(255,255,255)");
}

#[test]
fn rgb_value_ignores_alpha() {
    let translucent = Color { red: 4, green: 5, blue: 6, alpha: 0x33 };
    assert_eq!(rgb_value(translucent), "rgb(4,5,6)");
}

#[test]
fn generates_url_values() {
    assert_eq!(url_value("testId"), "url(#testId)");
}

#[test]
fn generates_color_attribute_strings() {
    let rgb = rgb_value(ZERO_ONE_TWO);
    assert_eq!(color_attribute(ColorAttribute::Fill, &rgb), " fill='rgb(0,1,2)'");
    assert_eq!(color_attribute(ColorAttribute::Stroke, &rgb), " stroke='rgb(0,1,2)'");
    assert_eq!(color_attribute(ColorAttribute::Stop, &rgb), " stop-color='rgb(0,1,2)'");
}

#[test]
fn maps_numeric_kinds() {
    assert_eq!(ColorAttribute::from_kind(0), ColorAttribute::Fill);
    assert_eq!(ColorAttribute::from_kind(1), ColorAttribute::Stroke);
    assert_eq!(ColorAttribute::from_kind(2), ColorAttribute::Stop);
}

#[test]
#[should_panic(expected = "invalid color attribute kind")]
fn aborts_on_out_of_range_kind() {
    ColorAttribute::from_kind(3);
}

#[test]
fn converts_packed_colors() {
    for packed in [0x000000u32, 0x010101, 0xFFFFFF] {
        let color = Color::from_packed(packed);
        assert_eq!(color.packed(), packed);
        assert_eq!(color.alpha, 0xFF);
    }
}
