//! Small AppKit control builders shared by the windows.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSPoint, NSRect, NSSize, Sel, NO, YES,
};

// NSTitledWindowMask (1) | NSClosableWindowMask (2) | NSMiniaturizableWindowMask (4)
const WINDOW_STYLE: u64 = 1 | 2 | 4;
// NSBackingStoreBuffered
const BACKING_BUFFERED: u64 = 2;
// NSBezelStyleRounded
const BEZEL_ROUNDED: u64 = 1;

#[inline]
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> NSRect {
    NSRect::new(NSPoint::new(x, y), NSSize::new(w, h))
}

/// Titled, closable window centred on the main screen. Not released on
/// close so it can be shown again.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_window(title: &str, width: f64, height: f64) -> id {
    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: rect(0.0, 0.0, width, height),
        styleMask: WINDOW_STYLE,
        backing: BACKING_BUFFERED,
        defer: NO
    ];
    let _: () = msg_send![window, setTitle: nsstring_id(title)];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, center];
    window
}

/// Static, non-editable text.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_label(frame: NSRect, text: &str) -> id {
    let lbl: id = msg_send![get_class("NSTextField"), alloc];
    let lbl: id = msg_send![lbl, initWithFrame: frame];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
    lbl
}

/// Multi-line wrapping label.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_wrapping_label(frame: NSRect, text: &str) -> id {
    let lbl = make_label(frame, text);
    let cell: id = msg_send![lbl, cell];
    let _: () = msg_send![cell, setWraps: YES];
    let _: () = msg_send![cell, setLineBreakMode: 0u64]; // NSLineBreakByWordWrapping
    lbl
}

/// Label with the bold system font at `size` points.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_title_label(frame: NSRect, text: &str, size: f64) -> id {
    let lbl = make_label(frame, text);
    let font: id = msg_send![get_class("NSFont"), boldSystemFontOfSize: size];
    let _: () = msg_send![lbl, setFont: font];
    lbl
}

/// Editable single-line text field with a placeholder.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_text_field(frame: NSRect, placeholder: &str) -> id {
    let tf: id = msg_send![get_class("NSTextField"), alloc];
    let tf: id = msg_send![tf, initWithFrame: frame];
    let _: () = msg_send![tf, setBezeled: YES];
    let _: () = msg_send![tf, setDrawsBackground: YES];
    let _: () = msg_send![tf, setEditable: YES];
    let _: () = msg_send![tf, setSelectable: YES];
    let _: () = msg_send![tf, setPlaceholderString: nsstring_id(placeholder)];
    tf
}

/// Rounded push button wired to `target`/`action`.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_button(frame: NSRect, title: &str, target: id, action: Sel) -> id {
    let btn: id = msg_send![get_class("NSButton"), alloc];
    let btn: id = msg_send![btn, initWithFrame: frame];
    let _: () = msg_send![btn, setTitle: nsstring_id(title)];
    let _: () = msg_send![btn, setBezelStyle: BEZEL_ROUNDED];
    let _: () = msg_send![btn, setTarget: target];
    let _: () = msg_send![btn, setAction: action];
    btn
}

/// Read-only scrolling text view. Returns `(scroll_view, text_view)`.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn make_read_only_text(frame: NSRect) -> (id, id) {
    let scroll: id = msg_send![get_class("NSScrollView"), alloc];
    let scroll: id = msg_send![scroll, initWithFrame: frame];
    let _: () = msg_send![scroll, setHasVerticalScroller: YES];
    let _: () = msg_send![scroll, setBorderType: 2u64]; // NSBezelBorder

    let content: NSSize = msg_send![scroll, contentSize];
    let text: id = msg_send![get_class("NSTextView"), alloc];
    let text: id = msg_send![
        text,
        initWithFrame: rect(0.0, 0.0, content.width, content.height)
    ];
    let _: () = msg_send![text, setEditable: NO];
    let _: () = msg_send![text, setSelectable: YES];
    let _: () = msg_send![text, setAutoresizingMask: 2u64]; // NSViewWidthSizable
    let _: () = msg_send![scroll, setDocumentView: text];
    (scroll, text)
}

/// Set the string of a label or text field. Ignores nil.
///
/// # Safety
/// `control` must be nil or an NSControl.
pub unsafe fn set_text(control: id, text: &str) {
    if control != nil {
        let _: () = msg_send![control, setStringValue: nsstring_id(text)];
    }
}

/// Enable or disable a control. Ignores nil.
///
/// # Safety
/// `control` must be nil or an NSControl.
pub unsafe fn set_enabled(control: id, enabled: bool) {
    if control != nil {
        let _: () = msg_send![control, setEnabled: if enabled { YES } else { NO }];
    }
}

/// Show or hide a view. Ignores nil.
///
/// # Safety
/// `view` must be nil or an NSView.
pub unsafe fn set_hidden(view: id, hidden: bool) {
    if view != nil {
        let _: () = msg_send![view, setHidden: if hidden { YES } else { NO }];
    }
}

/// Add several subviews to a window's content view.
///
/// # Safety
/// `window` must be a valid NSWindow and every view a valid NSView.
pub unsafe fn add_subviews(window: id, views: &[id]) {
    let content: id = msg_send![window, contentView];
    for &v in views {
        let _: () = msg_send![content, addSubview: v];
    }
}

/// Activate the app and bring `window` to front.
///
/// # Safety
/// `window` must be a valid NSWindow.
pub unsafe fn present(window: id) {
    let app: id = crate::platform::macos::ffi::bridge::NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    let _: () = msg_send![window, makeKeyAndOrderFront: nil];
}
