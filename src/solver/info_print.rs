use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;
use std::time::Duration;

impl<T> ConfigurablePrintTarget for IterativeInfo<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

const RULE: &str = "-----------------------------------------------------------------";

impl<T> IterativeInfo<T>
where
    T: FloatT,
{
    pub(crate) fn print_banner(&mut self, settings: &IterativeSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "             symsolve v{}  -  iterative SPD solver",
            crate::VERSION
        )?;
        writeln!(out, "{}", RULE)?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_configuration(
        &mut self,
        settings: &IterativeSettings<T>,
        n: usize,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {}", n)?;
        writeln!(out, "  method        = {}", self.method)?;
        writeln!(out,)?;

        self.print_settings(settings)?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_status_header(
        &mut self,
        settings: &IterativeSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        //print a subheader for the iterations info
        write!(out, "iter    ")?;
        match self.method {
            IterativeMethod::SteepestDescent => write!(out, "‖g‖       ")?,
            IterativeMethod::ConjugateGradient => write!(out, "‖p‖       ")?,
        }
        write!(out, "‖Δx‖      ")?;
        write!(out, "α         ")?;
        write!(out, "β         ")?;
        writeln!(out,)?;
        writeln!(out, "{}", RULE)?;
        out.flush()?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_status(&mut self, settings: &IterativeSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        write!(out, "{:>4}  ", self.iterations)?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.search_norm))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.step_norm))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.alpha))?;
        match self.method {
            IterativeMethod::SteepestDescent => write!(out, " ------   ")?,
            IterativeMethod::ConjugateGradient => {
                write!(out, "{}  ", expformat!("{:6.2e}", self.beta))?
            }
        }
        writeln!(out,)?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_footer(&mut self, settings: &IterativeSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "{}", RULE)?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(out, "iterations    = {}", self.iterations)?;
        writeln!(out, "‖b - Ax‖      = {}", expformat!("{:.4e}", self.residual_norm))?;
        writeln!(
            out,
            "solve time    = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;

        std::io::Result::Ok(())
    }

    fn print_settings(&mut self, settings: &IterativeSettings<T>) -> std::io::Result<()> {
        let out = &mut self.stream;
        let set = settings;

        writeln!(out, "settings:")?;
        writeln!(out, "  precision: {} bit", _get_precision_string::<T>())?;

        let time_lim_str = {
            if set.time_limit.is_infinite() {
                "Inf".to_string()
            } else {
                format!("{:?}", set.time_limit)
            }
        };
        writeln!(
            out,
            "  max iter = {}, time limit = {}",
            set.max_iter, time_lim_str
        )?;
        writeln!(
            out,
            "  tol = {:.1e}",
            self.method.tolerance(settings)
        )?;
        writeln!(out,)?;

        std::io::Result::Ok(())
    }
}

pub(crate) fn _print_timers(out: &mut PrintTarget, timers: &crate::timers::Timers) -> std::io::Result<()> {
    writeln!(out, "timing:")?;
    timers.print(out)
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.

fn _exp_str_reformat(mut thestr: String) -> String {
    // finite values in LowerExp format always contain 'e'
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars;
    if !has_sign {
        if has_short_exp {
            chars = "+0";
        } else {
            chars = "+";
        }
    } else if has_short_exp {
        chars = "0";
    } else {
        chars = "";
    }

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1.5e-3)), "1.50e-03");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1.5e3)), "1.50e+03");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1.5e-30)), "1.50e-30");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1.5e30)), "1.50e+30");
    assert_eq!(expformat!("{:.2e}", f64::NAN), "NaN");
}
