use rand::RngCore;
use rand_mt::Mt;

/// Mersenne Twister seeded through `init_by_array` with a one-word key.
pub fn seeded(seed: u32) -> Mt {
    Mt::new_with_key([seed])
}

/// Uniform index in `0..len` by taking the top `bit_length(len)` bits of a
/// word and rejecting anything past the end.
pub fn below<R: RngCore>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0 && len <= u32::MAX as usize);
    let bits = usize::BITS - len.leading_zeros();
    loop {
        let idx = (rng.next_u32() >> (32 - bits)) as usize;
        if idx < len {
            return idx;
        }
    }
}

/// Draws `len` characters from `alphabet` and returns them in reverse draw
/// order.
pub fn new<R: RngCore>(rng: &mut R, alphabet: &[char], len: usize) -> String {
    let mut drawn: Vec<char> = (0..len)
        .map(|_| alphabet[below(rng, alphabet.len())])
        .collect();
    drawn.reverse();

    drawn.into_iter().collect()
}
