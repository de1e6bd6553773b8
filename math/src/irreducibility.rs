use crate::params::FieldParameters;
use crate::poly;
use crate::traits::Word;

/// Distinct prime factors of `n` in increasing order.
fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

impl<W: Word> FieldParameters<W> {
    /// `x^(2^k) mod modulus`.
    fn frobenius_of_x(&self, k: u32) -> W {
        let x = self.reduce_blakely(W::ONE << 1);
        (0..k).fold(x, |acc, _| self.square(acc))
    }

    /// Rabin's test: the modulus is irreducible iff `x^(2^n) = x` and
    /// `gcd(modulus, x^(2^(n/p)) - x) = 1` for every prime `p` dividing `n`.
    pub fn is_irreducible(&self) -> bool {
        let x = self.reduce_blakely(W::ONE << 1);
        if self.frobenius_of_x(self.n) != x {
            return false;
        }
        prime_factors(self.n).into_iter().all(|p| {
            let h = self.frobenius_of_x(self.n / p) ^ x;
            poly::gcd(self.modulus, h).is_one()
        })
    }
}
