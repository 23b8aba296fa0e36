//! # farmfp
//!
//! Fast fingerprint hashing, bit-compatible with FarmHash64.
//!
//! ## Features
//!
//! - **Fast**: length-banded mixing, one pass, no allocation
//! - **Portable**: identical output on little- and big-endian hosts
//! - **`no_std` compatible**: the core needs neither `std` nor `alloc`
//! - **Two widths**: 64-bit fingerprint plus a 32-bit fold of it
//!
//! ## Quick Start
//!
//! ```rust
//! use farmfp::{farmfp64, farmfp32};
//!
//! // 64-bit fingerprint
//! let hash = farmfp64(b"Hello, World!");
//! assert_eq!(hash, 0x9da0e1cbfaea2842);
//!
//! // 32-bit fingerprint, folded from the 64-bit one
//! let hash = farmfp32(b"Hello, World!");
//! assert_eq!(hash, 4101594851);
//!
//! // Empty data is valid
//! assert_eq!(farmfp64(b""), 0x9ae16a3b2f90404f);
//! ```
//!
//! ## Hex Encoding
//!
//! With the default `std` feature, digests can be rendered as fixed-width
//! lowercase hex, the form most wire formats and log lines want:
//!
//! ```rust
//! use farmfp::farmfp64_hex;
//!
//! assert_eq!(farmfp64_hex(b""), "9ae16a3b2f90404f");
//! ```
//!
//! ## Algorithm
//!
//! - Four length bands (0–16, 17–32, 33–64, >64 bytes), each a closed-form
//!   mix; inputs over 64 bytes run a rolling loop over 64-byte blocks
//! - 128-to-64-bit Murmur-style compression as the universal mix-down step
//! - Not suitable for cryptography: no preimage or collision resistance,
//!   and no seeding beyond the fixed internal seed
//!
//! ## License
//!
//! MIT License - Copyright 2026 ScaleCode Solutions

#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// Primes between 2^63 and 2^64, used as mixing multipliers.
const K0: u64 = 0xc3a5c85c97cb3127;
const K1: u64 = 0xb492b66fbe98f273;
const K2: u64 = 0x9ae16a3b2f90404f;

/// Murmur3 constants, used only by the 32-bit fold.
const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

/// Fixed seed for the block loop; there is no seeded variant.
const SEED: u64 = 81;

/// 128-bit accumulator, always passed and returned by value.
#[derive(Clone, Copy)]
struct U128 {
    lo: u64,
    hi: u64,
}

/// Read 8 bytes at `i` as a little-endian u64, independent of host order.
#[inline(always)]
fn fetch64(s: &[u8], i: usize) -> u64 {
    u64::from_le_bytes(s[i..i + 8].try_into().unwrap())
}

/// Read 4 bytes at `i` as a little-endian u32, independent of host order.
#[inline(always)]
fn fetch32(s: &[u8], i: usize) -> u32 {
    u32::from_le_bytes(s[i..i + 4].try_into().unwrap())
}

/// Single avalanche step.
#[inline(always)]
fn shift_mix(v: u64) -> u64 {
    v ^ (v >> 47)
}

/// Compress two 64-bit words into one with a caller-supplied odd multiplier.
#[inline(always)]
fn mix128(u: u64, v: u64, mul: u64) -> u64 {
    let a = (u ^ v).wrapping_mul(mul);
    let a = a ^ (a >> 47);
    let b = (v ^ a).wrapping_mul(mul);
    let b = b ^ (b >> 47);
    b.wrapping_mul(mul)
}

/// One Murmur3 round on 32-bit words.
#[inline(always)]
fn murmur_round(a: u32, h: u32) -> u32 {
    let a = a.wrapping_mul(C1).rotate_right(17).wrapping_mul(C2);
    let h = (h ^ a).rotate_right(19);
    h.wrapping_mul(5).wrapping_add(0xe6546b64)
}

/// Fold a 64-bit digest into 32 bits through one Murmur round.
#[inline(always)]
fn fold64_to_32(x: u64) -> u32 {
    murmur_round((x >> 32) as u32, x as u32)
}

/// 128-bit mix of four input words and two seeds. Internal diffusion step
/// only; never exposed as a standalone hash.
#[inline(always)]
fn weak_hash32_words(w: u64, x: u64, y: u64, z: u64, a: u64, b: u64) -> U128 {
    let a = a.wrapping_add(w);
    let b = b.wrapping_add(a).wrapping_add(z).rotate_right(21);
    let c = a;
    let a = a.wrapping_add(x).wrapping_add(y);
    let b = b.wrapping_add(a.rotate_right(44));
    U128 {
        lo: a.wrapping_add(z),
        hi: b.wrapping_add(c),
    }
}

/// [`weak_hash32_words`] over the 32 bytes at `s[i..i + 32]`.
#[inline(always)]
fn weak_hash32(s: &[u8], i: usize, a: u64, b: u64) -> U128 {
    weak_hash32_words(
        fetch64(s, i),
        fetch64(s, i + 8),
        fetch64(s, i + 16),
        fetch64(s, i + 24),
        a,
        b,
    )
}

fn hash_up_to_16(s: &[u8]) -> u64 {
    let len = s.len();

    if len >= 8 {
        let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
        let a = fetch64(s, 0).wrapping_add(K2);
        let b = fetch64(s, len - 8);
        let c = b.rotate_right(37).wrapping_mul(mul).wrapping_add(a);
        let d = a.rotate_right(25).wrapping_add(b).wrapping_mul(mul);
        return mix128(c, d, mul);
    }

    if len >= 4 {
        let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
        let a = u64::from(fetch32(s, 0));
        return mix128(
            (len as u64).wrapping_add(a << 3),
            u64::from(fetch32(s, len - 4)),
            mul,
        );
    }

    if len > 0 {
        // First, middle and last byte; for len 1 all three are the same byte.
        let a = s[0];
        let b = s[len >> 1];
        let c = s[len - 1];
        let y = u32::from(a).wrapping_add(u32::from(b) << 8);
        let z = (len as u32).wrapping_add(u32::from(c) << 2);
        return shift_mix(u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K0))
            .wrapping_mul(K2);
    }

    K2
}

fn hash_17_to_32(s: &[u8]) -> u64 {
    let len = s.len();
    let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
    let a = fetch64(s, 0).wrapping_mul(K1);
    let b = fetch64(s, 8);
    let c = fetch64(s, len - 8).wrapping_mul(mul);
    let d = fetch64(s, len - 16).wrapping_mul(K2);

    mix128(
        a.wrapping_add(b)
            .rotate_right(43)
            .wrapping_add(c.rotate_right(30))
            .wrapping_add(d),
        a.wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c),
        mul,
    )
}

fn hash_33_to_64(s: &[u8]) -> u64 {
    let len = s.len();
    let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
    let a = fetch64(s, 0).wrapping_mul(K2);
    let b = fetch64(s, 8);
    let c = fetch64(s, len - 8).wrapping_mul(mul);
    let d = fetch64(s, len - 16).wrapping_mul(K2);
    let y = a
        .wrapping_add(b)
        .rotate_right(43)
        .wrapping_add(c.rotate_right(30))
        .wrapping_add(d);
    let z = mix128(
        y,
        a.wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c),
        mul,
    );
    let e = fetch64(s, 16).wrapping_mul(mul);
    let f = fetch64(s, 24);
    let g = y.wrapping_add(fetch64(s, len - 32)).wrapping_mul(mul);
    let h = z.wrapping_add(fetch64(s, len - 24)).wrapping_mul(mul);

    mix128(
        e.wrapping_add(f)
            .rotate_right(43)
            .wrapping_add(g.rotate_right(30))
            .wrapping_add(h),
        e.wrapping_add(f.wrapping_add(a).rotate_right(18))
            .wrapping_add(g),
        mul,
    )
}

fn hash_over_64(s: &[u8]) -> u64 {
    let len = s.len();

    // 56 bytes of rolling state: v, w, x, y and z.
    let mut x = SEED.wrapping_mul(K2).wrapping_add(fetch64(s, 0));
    let mut y = SEED.wrapping_mul(K1).wrapping_add(113);
    let mut z = shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2);
    let mut v = U128 { lo: 0, hi: 0 };
    let mut w = U128 { lo: 0, hi: 0 };

    // After the strides 1 to 64 tail bytes remain. The final window is the
    // exact 64 bytes ending at the last input byte; when len is a multiple
    // of 64 it revisits the last full stride with the adjusted multiplier.
    let end = ((len - 1) / 64) * 64;
    let last64 = len - 64;

    let mut p = 0;
    loop {
        x = x
            .wrapping_add(y)
            .wrapping_add(v.lo)
            .wrapping_add(fetch64(s, p + 8))
            .rotate_right(37)
            .wrapping_mul(K1);
        y = y
            .wrapping_add(v.hi)
            .wrapping_add(fetch64(s, p + 48))
            .rotate_right(42)
            .wrapping_mul(K1);
        x ^= w.hi;
        y = y.wrapping_add(v.lo).wrapping_add(fetch64(s, p + 40));
        z = z.wrapping_add(w.lo).rotate_right(33).wrapping_mul(K1);
        v = weak_hash32(s, p, v.hi.wrapping_mul(K1), x.wrapping_add(w.lo));
        w = weak_hash32(
            s,
            p + 32,
            z.wrapping_add(w.hi),
            y.wrapping_add(fetch64(s, p + 16)),
        );
        core::mem::swap(&mut x, &mut z);
        p += 64;
        if p == end {
            break;
        }
    }

    let mul = K1.wrapping_add((z & 0xff) << 1);
    let p = last64;
    w.lo = w.lo.wrapping_add(((len - 1) & 63) as u64);
    v.lo = v.lo.wrapping_add(w.lo);
    w.lo = w.lo.wrapping_add(v.lo);
    x = x
        .wrapping_add(y)
        .wrapping_add(v.lo)
        .wrapping_add(fetch64(s, p + 8))
        .rotate_right(37)
        .wrapping_mul(mul);
    y = y
        .wrapping_add(v.hi)
        .wrapping_add(fetch64(s, p + 48))
        .rotate_right(42)
        .wrapping_mul(mul);
    x ^= w.hi.wrapping_mul(9);
    y = y
        .wrapping_add(v.lo.wrapping_mul(9))
        .wrapping_add(fetch64(s, p + 40));
    z = z.wrapping_add(w.lo).rotate_right(33).wrapping_mul(mul);
    v = weak_hash32(s, p, v.hi.wrapping_mul(mul), x.wrapping_add(w.lo));
    w = weak_hash32(
        s,
        p + 32,
        z.wrapping_add(w.hi),
        y.wrapping_add(fetch64(s, p + 16)),
    );
    core::mem::swap(&mut x, &mut z);

    mix128(
        mix128(v.lo, w.lo, mul)
            .wrapping_add(shift_mix(y).wrapping_mul(K0))
            .wrapping_add(z),
        mix128(v.hi, w.hi, mul).wrapping_add(x),
        mul,
    )
}

/// Compute the 64-bit fingerprint of the given data.
///
/// Pure and total: every byte slice, including the empty one, maps to a
/// defined value, the same on every call, every run and every architecture.
/// Runs in time linear in the input length with no heap allocation.
///
/// # Example
///
/// ```rust
/// use farmfp::farmfp64;
///
/// assert_eq!(farmfp64(b""), 0x9ae16a3b2f90404f);
/// assert_eq!(farmfp64(b"Lorem ipsum dolor sit amet"), 16191328082827683567);
///
/// // Deterministic
/// assert_eq!(farmfp64(b"data"), farmfp64(b"data"));
/// ```
pub fn farmfp64(data: &[u8]) -> u64 {
    let len = data.len();

    if len <= 16 {
        return hash_up_to_16(data);
    }
    if len <= 32 {
        return hash_17_to_32(data);
    }
    if len <= 64 {
        return hash_33_to_64(data);
    }
    hash_over_64(data)
}

/// Compute the 32-bit fingerprint of the given data.
///
/// Defined as a Murmur fold of [`farmfp64`], so it inherits its
/// distribution. Not bit-compatible with any native 32-bit member of the
/// FarmHash family.
///
/// # Example
///
/// ```rust
/// use farmfp::farmfp32;
///
/// assert_eq!(farmfp32(b"Lorem ipsum dolor sit amet"), 2990660358);
/// ```
#[inline]
pub fn farmfp32(data: &[u8]) -> u32 {
    fold64_to_32(farmfp64(data))
}

/// [`farmfp64`] rendered as 16 lowercase, zero-padded hex digits.
///
/// # Example
///
/// ```rust
/// use farmfp::farmfp64_hex;
///
/// assert_eq!(farmfp64_hex(b""), "9ae16a3b2f90404f");
/// ```
#[cfg(feature = "std")]
pub fn farmfp64_hex(data: &[u8]) -> std::string::String {
    std::format!("{:016x}", farmfp64(data))
}

/// [`farmfp32`] rendered as 8 lowercase, zero-padded hex digits.
///
/// # Example
///
/// ```rust
/// use farmfp::farmfp32_hex;
///
/// assert_eq!(farmfp32_hex(b""), "fe0061e9");
/// ```
#[cfg(feature = "std")]
pub fn farmfp32_hex(data: &[u8]) -> std::string::String {
    std::format!("{:08x}", farmfp32(data))
}
