#![allow(dead_code)]

/// Some literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B.C. Carlson, 1995: *Numerical computation of real or complex elliptic integrals*.
    /// Numerical Algorithms 10, pp. 13–26.
    /// [DOI](https://doi.org/10.1007/BF02198293).
    Car95,

    /// C.W. Clenshaw, 1955: *A note on the summation of Chebyshev series*.
    /// Mathematical Tables and Other Aids to Computation 9(51), pp. 118–120.
    /// [DOI](https://doi.org/10.1090/S0025-5718-1955-0071856-0).
    Cle55,

    /// F.W.J. Olver et al. (eds.): *NIST Digital Library of Mathematical Functions*,
    /// chapter 19: Elliptic Integrals.
    /// [URL](https://dlmf.nist.gov/19)
    Dlmf,

    /// Charles F.F. Karney, 2011: *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    Kar11,

    /// Charles F.F. Karney, 2022: On auxiliary latitudes
    /// [DOI](https://doi.org/10.48550/arXiv.2212.05818)
    /// [pdf](https://arxiv.org/pdf/2212.05818.pdf)
    Kar22,

    /// Charles F.F. Karney, 2023: *On auxiliary latitudes*.
    /// Survey Review 56(395), pp. 165–180. The journal version of
    /// [Kar22](Bibliography::Kar22), with the divided differences in its appendix.
    Kar23,

    /// John P. Snyder, 1987: *Map Projections: A Working Manual*.
    /// U.S. Geological Survey Professional Paper 1395, 383 pp.
    /// [URL](https://pubs.usgs.gov/publication/pp1395)
    Sny87,
}
