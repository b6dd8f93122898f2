use raw;

struct point {
    x: i32,
    y: i32,
}

struct scalars {
    flag: bool,
    a: i8,
    b: i16,
    c: i32,
    d: i64,
    e: u8,
    f: u16,
    g: u32,
    h: u64,
    x: f32,
    y: f64,
}

struct event {
    id: u64,
    at: raw::Time,
    took: raw::Duration,
    name: raw::String,
    tag: raw::String,
    ok: bool,
}

// Not raw: stays as written and gets no twin.
struct Labelled {
    label: String,
    x: i32,
}
