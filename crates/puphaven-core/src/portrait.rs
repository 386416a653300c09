//! Procedural puppy portraits.
//!
//! The demo ships no bitmap assets. Each portrait identifier renders to a
//! deterministic image seeded from a hash of the identifier: a coat ramp, a
//! soft two-tone backdrop, simple head geometry and a saturated collar. The
//! same identifier and size always produce byte-identical pixels.

use glam::Vec2;
use image::{Rgba, RgbaImage};

/// Coat ramps as (base, shade) pairs.
const COATS: &[([u8; 3], [u8; 3])] = &[
    ([222, 184, 135], [166, 124, 82]),  // golden
    ([105, 80, 66], [66, 47, 38]),      // chocolate
    ([236, 226, 208], [196, 180, 156]), // cream
    ([92, 88, 90], [54, 52, 56]),       // slate gray
    ([58, 52, 50], [150, 110, 70]),     // black and tan
    ([196, 108, 62], [140, 70, 40]),    // red
    ([176, 176, 180], [110, 110, 118]), // silver
];

/// Backdrop gradients as (top, bottom) pairs. Kept desaturated and
/// mid-lightness so they read as muted tones.
const BACKDROPS: &[([u8; 3], [u8; 3])] = &[
    ([156, 175, 136], [118, 140, 112]), // sage
    ([146, 168, 186], [108, 132, 156]), // slate blue
    ([184, 166, 188], [146, 128, 158]), // heather
    ([172, 160, 140], [134, 124, 106]), // sand
    ([148, 176, 172], [110, 142, 140]), // eucalyptus
];

/// Collar colors. Saturated mid-lightness hues that survive the stock
/// palette filter.
const COLLARS: &[[u8; 3]] = &[
    [0, 150, 136],  // teal
    [30, 136, 229], // blue
    [142, 36, 170], // purple
    [67, 160, 71],  // green
    [216, 27, 96],  // raspberry
    [253, 216, 53], // yellow
];

fn hash_id(id: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.as_bytes() {
        h ^= u64::from(*byte);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    mix(h)
}

fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn pick<T: Copy>(table: &[T], seed: u64, lane: u64) -> T {
    table[(mix(seed ^ lane) % table.len() as u64) as usize]
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = (f32::from(a[i]) + (f32::from(b[i]) - f32::from(a[i])) * t).round() as u8;
    }
    out
}

fn scale_rgb(rgb: [u8; 3], factor: f32) -> [u8; 3] {
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = (f32::from(rgb[i]) * factor).clamp(0.0, 255.0) as u8;
    }
    out
}

fn in_disc(p: Vec2, center: Vec2, radius: f32) -> bool {
    (p - center).length_squared() <= radius * radius
}

fn in_ellipse(p: Vec2, center: Vec2, rx: f32, ry: f32) -> bool {
    let d = p - center;
    (d.x / rx) * (d.x / rx) + (d.y / ry) * (d.y / ry) <= 1.0
}

/// Render the portrait for `image_id` at the given size.
///
/// Deterministic: the identifier and dimensions fully define the output.
/// Unknown identifiers render like any other; the hash covers the whole id
/// space.
pub fn render(image_id: &str, width: u32, height: u32) -> RgbaImage {
    let seed = hash_id(image_id);
    let (coat_base, coat_shade) = pick(COATS, seed, 1);
    let (bg_top, bg_bottom) = pick(BACKDROPS, seed, 2);
    let collar = pick(COLLARS, seed, 3);

    // Head placement jitters a little per identifier.
    let jitter_x = ((mix(seed ^ 4) % 21) as f32 - 10.0) / 100.0;
    let jitter_y = ((mix(seed ^ 5) % 15) as f32 - 7.0) / 100.0;

    let w = width as f32;
    let h = height.max(1) as f32;
    let size = w.min(h);
    let head_c = Vec2::new(w * (0.5 + jitter_x), h * (0.54 + jitter_y));
    let head_r = size * 0.30;
    let ear_off = Vec2::new(head_r * 0.80, head_r * 0.85);
    let ear_r = head_r * 0.42;
    let muzzle_c = head_c + Vec2::new(0.0, head_r * 0.42);
    let eye_off = head_r * 0.38;
    let eye_c_y = head_c.y - head_r * 0.12;
    let eye_r = head_r * 0.09;

    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        let noise = mix(seed ^ (u64::from(y) << 32 | u64::from(x)));

        // Backdrop gradient with a light speckle.
        let t = p.y / h;
        let mut rgb = lerp_rgb(bg_top, bg_bottom, t);
        let speck = ((noise & 0x0f) as f32 - 7.5) / 255.0;
        rgb = lerp_rgb(rgb, [255, 255, 255], speck.max(0.0));
        rgb = lerp_rgb(rgb, [0, 0, 0], (-speck).max(0.0));

        // Ears sit behind the head.
        let left_ear = head_c + Vec2::new(-ear_off.x, -ear_off.y);
        let right_ear = head_c + Vec2::new(ear_off.x, -ear_off.y);
        if in_disc(p, left_ear, ear_r) || in_disc(p, right_ear, ear_r) {
            rgb = scale_rgb(coat_shade, 0.85);
        }

        // Collar band below the head.
        let neck_top = head_c.y + head_r * 0.80;
        if p.y > neck_top
            && p.y < neck_top + head_r * 0.28
            && (p.x - head_c.x).abs() < head_r * 0.95
        {
            rgb = collar;
        }

        // Head with a radial coat ramp and per-pixel fur grain.
        if in_disc(p, head_c, head_r) {
            let d = (p - head_c).length() / head_r;
            rgb = lerp_rgb(coat_base, coat_shade, d * d);
            let grain = ((noise >> 8) & 0x1f) as f32 / 31.0;
            rgb = lerp_rgb(rgb, coat_shade, grain * 0.25);
        }

        // Muzzle, eyes, nose.
        if in_ellipse(p, muzzle_c, head_r * 0.52, head_r * 0.40) {
            rgb = lerp_rgb(coat_base, [245, 238, 224], 0.55);
        }
        let left_eye = Vec2::new(head_c.x - eye_off, eye_c_y);
        let right_eye = Vec2::new(head_c.x + eye_off, eye_c_y);
        if in_disc(p, left_eye, eye_r) || in_disc(p, right_eye, eye_r) {
            rgb = [32, 26, 24];
        }
        if in_ellipse(
            p,
            muzzle_c - Vec2::new(0.0, head_r * 0.18),
            eye_r * 1.3,
            eye_r,
        ) {
            rgb = [38, 30, 28];
        }

        *pixel = Rgba([rgb[0], rgb[1], rgb[2], 255]);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let a = render("biscuit_sunny", 128, 128);
        let b = render("biscuit_sunny", 128, 128);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_distinct_ids_render_distinct_portraits() {
        let a = render("biscuit_sunny", 64, 64);
        let b = render("moose_meadow", 64, 64);
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_dimensions_are_respected() {
        let img = render("pepper_run", 200, 150);
        assert_eq!(img.width(), 200);
        assert_eq!(img.height(), 150);
    }

    #[test]
    fn test_unknown_id_still_renders() {
        let img = render("no_such_portrait", 32, 32);
        assert_eq!(img.width(), 32);
    }

    #[test]
    fn test_pixels_are_opaque() {
        let img = render("willow_hill", 48, 48);
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
