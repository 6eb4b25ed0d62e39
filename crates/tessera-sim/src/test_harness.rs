//! Deterministic walk scenarios exercising the full route → queue → step →
//! position loop, tick by tick.
